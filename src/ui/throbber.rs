//! Spinner shown while a draw is in flight.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Lines shown under the spinner while the capsule rolls.
const SPIN_MESSAGES: [&str; 8] = [
    "The capsule is rolling...",
    "Something glints inside...",
    "Fortune is deciding...",
    "Almost there...",
    "The machine rumbles...",
    "Crossing your fingers...",
    "A faint glow...",
    "Luck is being weighed...",
];

/// Returns the current time in milliseconds since UNIX epoch.
fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Returns the current spinner character based on system time.
/// The spinner cycles every 100ms, completing a full rotation every second.
pub fn spinner_char() -> char {
    let millis = current_millis();
    SPINNER[((millis / 100) % 10) as usize]
}

/// Stable for the same seed. Callers pass the draw number.
pub fn spin_message(seed: u64) -> &'static str {
    SPIN_MESSAGES[(seed.wrapping_mul(7) as usize) % SPIN_MESSAGES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_char_is_braille() {
        assert!(SPINNER.contains(&spinner_char()));
    }

    #[test]
    fn test_spin_message_stable() {
        assert_eq!(spin_message(3), spin_message(3));
        assert_eq!(spin_message(0), SPIN_MESSAGES[0]);
    }
}
