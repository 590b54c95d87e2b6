//! Simulation runner. Samples through `select_item`, the same path a
//! session draw takes, with a seeded ChaCha stream.

use super::config::SimConfig;
use super::report::SimReport;
use crate::draw::{select_item, RngSource};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut source = RngSource(rng);
    let mut report = SimReport::new(&config.table, config.draws, config.seed);

    for n in 0..config.draws {
        let item = select_item(&config.table, &mut source, n as i64);
        report.record(&item);
    }
    report.finish();

    debug!(
        "Simulated {} draws, max deviation {:.3}pp",
        config.draws,
        report.max_deviation_pct()
    );
    report
}
