//! Draw distribution simulator CLI.
//!
//! Draws many items through the real engine and compares tier frequencies
//! with the configured weights.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 100,000 draws, built-in table
//!   cargo run --bin simulate -- -n 5000 --seed 42 # Reproducible short run
//!   cargo run --bin simulate -- --table my.json   # Check a custom table
//!   cargo run --bin simulate -- --print-table     # Starting point for a custom table

use clap::Parser;
use gacha::build_info;
use gacha::core::constants::DEFAULT_SIM_DRAWS;
use gacha::simulator::{run_simulation, SimConfig};
use gacha::WeightTable;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Gacha draw distribution simulator")]
struct Args {
    /// Number of draws
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIM_DRAWS)]
    draws: u32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON weight table to sample from
    #[arg(long, env = "GACHA_TABLE")]
    table: Option<PathBuf>,

    /// Save a JSON report next to the text output
    #[arg(long)]
    json: bool,

    /// Print the weight table as JSON and exit
    #[arg(long)]
    print_table: bool,

    /// Fail if any tier deviates from its weight by more than this many percentage points
    #[arg(long)]
    tolerance: Option<f64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let table = match &args.table {
        Some(path) => match WeightTable::load(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("Cannot use weight table {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => WeightTable::reference(),
    };

    if args.print_table {
        return match table.to_json() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Cannot serialize weight table: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let config = SimConfig {
        draws: args.draws,
        seed: args.seed,
        table,
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GACHA DRAW SIMULATOR                             ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  {}", build_info::version_line("simulate"));
    println!();
    info!("Running {} draws", config.draws);

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "draw_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            eprintln!("Failed to write {}: {}", filename, e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    if let Some(tolerance) = args.tolerance {
        let deviation = report.max_deviation_pct();
        if deviation > tolerance {
            eprintln!(
                "Max deviation {:.3}pp exceeds tolerance {:.3}pp",
                deviation, tolerance
            );
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
