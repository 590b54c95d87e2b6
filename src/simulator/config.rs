//! Simulation configuration.

use crate::core::constants::DEFAULT_SIM_DRAWS;
use crate::draw::WeightTable;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of items to draw
    pub draws: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Table to sample from
    pub table: WeightTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            draws: DEFAULT_SIM_DRAWS,
            seed: None,
            table: WeightTable::reference(),
        }
    }
}

impl SimConfig {
    /// Small reproducible run.
    pub fn quick(seed: u64) -> Self {
        Self {
            draws: 10_000,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
