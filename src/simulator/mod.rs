//! Monte Carlo check of the draw distribution.
//!
//! Draws many items through the same engine the game uses and compares the
//! observed tier frequencies with `weight / total_weight`.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{SimReport, TierStats};
pub use runner::run_simulation;
