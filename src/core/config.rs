use super::constants::{LARGE_BUDGET_CONFIRM_THRESHOLD, MAX_BUDGET, SPIN_DELAY_MS};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings for a gacha session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GachaConfig {
    /// Largest budget `configure` accepts
    pub max_budget: u32,

    /// Budgets above this ask the player to confirm first
    pub confirm_threshold: u32,

    /// Suspense delay between requesting a draw and committing it
    pub spin_delay: Duration,

    /// Directory holding the session file (None = ~/.gacha/)
    pub data_dir: Option<PathBuf>,

    /// Custom weight table file (None = built-in table)
    pub table_path: Option<PathBuf>,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            max_budget: MAX_BUDGET,
            confirm_threshold: LARGE_BUDGET_CONFIRM_THRESHOLD,
            spin_delay: Duration::from_millis(SPIN_DELAY_MS),
            data_dir: None,
            table_path: None,
        }
    }
}

impl GachaConfig {
    /// Config with no suspense delay, for tests and batch runs.
    pub fn instant() -> Self {
        Self {
            spin_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    pub fn needs_confirmation(&self, budget: u32) -> bool {
        budget > self.confirm_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GachaConfig::default();
        assert_eq!(config.max_budget, 9999);
        assert_eq!(config.spin_delay, Duration::from_millis(800));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_needs_confirmation_above_threshold() {
        let config = GachaConfig::default();
        assert!(!config.needs_confirmation(1000));
        assert!(config.needs_confirmation(1001));
    }
}
