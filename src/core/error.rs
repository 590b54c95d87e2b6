//! Error taxonomy for the session state machine, draw engine and storage.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GachaError>;

#[derive(Debug, Error)]
pub enum GachaError {
    /// Requested budget is not a whole number in `1..=max`.
    #[error("invalid budget {input:?}: enter a whole number between 1 and {max}")]
    InvalidBudget { input: String, max: u32 },

    /// Configuration is one-shot; a second configure is rejected.
    #[error("session is already configured")]
    AlreadyConfigured,

    #[error("session is not configured yet")]
    NotConfigured,

    #[error("all {budget} draws have been used")]
    BudgetExhausted { budget: u32 },

    /// Startup-time fault in the rarity weights or name pools.
    #[error("invalid weight table: {0}")]
    InvalidWeightTable(String),

    /// Persisted record could not be parsed or breaks a session invariant.
    #[error("corrupt persisted state: {0}")]
    CorruptPersistedState(String),

    /// A previous draw is still inside its suspense delay.
    #[error("a draw is already in progress")]
    DrawInFlight,

    #[error("storage error: {0}")]
    Storage(#[from] io::Error),
}

impl GachaError {
    /// True for the two conditions that should simply disable the draw action.
    pub fn blocks_drawing(&self) -> bool {
        matches!(
            self,
            GachaError::NotConfigured | GachaError::BudgetExhausted { .. }
        )
    }
}
