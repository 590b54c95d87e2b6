//! Input handling for the setup and gacha screens.
//!
//! Keys are turned into `InputAction`s here; main.rs applies them to the
//! session controller. Overlays take priority over the screen beneath them.

use crate::core::config::GachaConfig;
use crate::core::constants::{DEFAULT_BUDGET_INPUT, MAX_BUDGET_INPUT_CHARS};
use crate::core::session::parse_budget;
use crate::draw::Item;
use crossterm::event::{KeyCode, KeyEvent};

/// At most one overlay is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Budget above the confirmation threshold, waiting for Y/N
    ConfirmLargeBudget(u32),
    /// Full wipe, waiting for Y/N
    ConfirmReset,
    /// Celebration for a freshly drawn item
    DrawResult(Item),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Continue,
    Quit,
    Configure(u32),
    Draw,
    Reset,
}

pub struct UiState {
    pub budget_input: String,
    pub validation_error: Option<String>,
    pub overlay: Overlay,
    /// One-line message under the draw button
    pub status: Option<String>,
    /// First collection row shown
    pub scroll: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            budget_input: DEFAULT_BUDGET_INPUT.to_string(),
            validation_error: None,
            overlay: Overlay::None,
            status: None,
            scroll: 0,
        }
    }

    pub fn show_result(&mut self, item: Item) {
        self.status = None;
        self.scroll = 0;
        self.overlay = Overlay::DrawResult(item);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn handle_setup_key(ui: &mut UiState, key: KeyEvent, config: &GachaConfig) -> InputAction {
    if let Overlay::ConfirmLargeBudget(budget) = ui.overlay {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                ui.overlay = Overlay::None;
                InputAction::Configure(budget)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                ui.overlay = Overlay::None;
                InputAction::Continue
            }
            _ => InputAction::Continue,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if ui.budget_input.len() < MAX_BUDGET_INPUT_CHARS {
                ui.budget_input.push(c);
            }
            ui.validation_error = None;
            InputAction::Continue
        }
        KeyCode::Backspace => {
            ui.budget_input.pop();
            ui.validation_error = None;
            InputAction::Continue
        }
        KeyCode::Enter => match parse_budget(&ui.budget_input, config.max_budget) {
            Ok(budget) if config.needs_confirmation(budget) => {
                ui.overlay = Overlay::ConfirmLargeBudget(budget);
                InputAction::Continue
            }
            Ok(budget) => InputAction::Configure(budget),
            Err(e) => {
                ui.validation_error = Some(e.to_string());
                InputAction::Continue
            }
        },
        KeyCode::Esc => InputAction::Quit,
        _ => InputAction::Continue,
    }
}

pub fn handle_gacha_key(ui: &mut UiState, key: KeyEvent, can_draw: bool) -> InputAction {
    match ui.overlay {
        Overlay::DrawResult(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                ui.overlay = Overlay::None;
            }
            return InputAction::Continue;
        }
        Overlay::ConfirmReset => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    ui.overlay = Overlay::None;
                    InputAction::Reset
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ui.overlay = Overlay::None;
                    InputAction::Continue
                }
                _ => InputAction::Continue,
            };
        }
        Overlay::ConfirmLargeBudget(_) | Overlay::None => {}
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if can_draw {
                InputAction::Draw
            } else {
                InputAction::Continue
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            ui.overlay = Overlay::ConfirmReset;
            InputAction::Continue
        }
        KeyCode::Up => {
            ui.scroll = ui.scroll.saturating_sub(1);
            InputAction::Continue
        }
        KeyCode::Down => {
            ui.scroll = ui.scroll.saturating_add(1);
            InputAction::Continue
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Rarity;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn item() -> Item {
        Item {
            id: "1".to_string(),
            rarity: Rarity::Epic,
            name: "Dragon Scale".to_string(),
            image: String::new(),
            obtained_at: 0,
        }
    }

    #[test]
    fn test_setup_starts_with_default_input() {
        assert_eq!(UiState::new().budget_input, "10");
    }

    #[test]
    fn test_setup_digits_only_and_capped() {
        let mut ui = UiState::new();
        let config = GachaConfig::default();
        ui.budget_input.clear();
        for c in ['1', 'a', '2', '.', '3', '4', '5'] {
            handle_setup_key(&mut ui, key(KeyCode::Char(c)), &config);
        }
        assert_eq!(ui.budget_input, "1234");
        handle_setup_key(&mut ui, key(KeyCode::Backspace), &config);
        assert_eq!(ui.budget_input, "123");
    }

    #[test]
    fn test_setup_enter_configures() {
        let mut ui = UiState::new();
        let action = handle_setup_key(&mut ui, key(KeyCode::Enter), &GachaConfig::default());
        assert_eq!(action, InputAction::Configure(10));
    }

    #[test]
    fn test_setup_invalid_budget_shows_error() {
        let mut ui = UiState::new();
        ui.budget_input = "0".to_string();
        let action = handle_setup_key(&mut ui, key(KeyCode::Enter), &GachaConfig::default());
        assert_eq!(action, InputAction::Continue);
        assert!(ui.validation_error.is_some());

        handle_setup_key(&mut ui, key(KeyCode::Char('5')), &GachaConfig::default());
        assert!(ui.validation_error.is_none());
    }

    #[test]
    fn test_setup_large_budget_needs_confirmation() {
        let config = GachaConfig::default();
        let mut ui = UiState::new();
        ui.budget_input = "5000".to_string();

        let action = handle_setup_key(&mut ui, key(KeyCode::Enter), &config);
        assert_eq!(action, InputAction::Continue);
        assert_eq!(ui.overlay, Overlay::ConfirmLargeBudget(5000));

        // Typing is ignored while the dialog is open
        handle_setup_key(&mut ui, key(KeyCode::Char('1')), &config);
        assert_eq!(ui.budget_input, "5000");

        let action = handle_setup_key(&mut ui, key(KeyCode::Char('n')), &config);
        assert_eq!(action, InputAction::Continue);
        assert_eq!(ui.overlay, Overlay::None);

        handle_setup_key(&mut ui, key(KeyCode::Enter), &config);
        let action = handle_setup_key(&mut ui, key(KeyCode::Char('y')), &config);
        assert_eq!(action, InputAction::Configure(5000));
    }

    #[test]
    fn test_gacha_draw_only_when_enabled() {
        let mut ui = UiState::new();
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Char(' ')), true),
            InputAction::Draw
        );
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Enter), false),
            InputAction::Continue
        );
    }

    #[test]
    fn test_gacha_result_overlay_swallows_keys() {
        let mut ui = UiState::new();
        ui.show_result(item());
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Char('q')), true),
            InputAction::Continue
        );
        assert!(matches!(ui.overlay, Overlay::DrawResult(_)));
        handle_gacha_key(&mut ui, key(KeyCode::Enter), true);
        assert_eq!(ui.overlay, Overlay::None);
    }

    #[test]
    fn test_gacha_reset_requires_confirmation() {
        let mut ui = UiState::new();
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Char('r')), true),
            InputAction::Continue
        );
        assert_eq!(ui.overlay, Overlay::ConfirmReset);
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Esc), true),
            InputAction::Continue
        );
        assert_eq!(ui.overlay, Overlay::None);

        handle_gacha_key(&mut ui, key(KeyCode::Char('R')), true);
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Char('Y')), true),
            InputAction::Reset
        );
    }

    #[test]
    fn test_gacha_scroll_and_quit() {
        let mut ui = UiState::new();
        handle_gacha_key(&mut ui, key(KeyCode::Up), true);
        assert_eq!(ui.scroll, 0);
        handle_gacha_key(&mut ui, key(KeyCode::Down), true);
        assert_eq!(ui.scroll, 1);
        assert_eq!(
            handle_gacha_key(&mut ui, key(KeyCode::Char('q')), true),
            InputAction::Quit
        );
    }
}
