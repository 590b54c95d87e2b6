//! Simulation report generation.

use crate::draw::{Item, Rarity, WeightTable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Observed vs expected frequency for one tier.
#[derive(Debug, Clone, Serialize)]
pub struct TierStats {
    pub rarity: Rarity,
    pub weight: u32,
    pub count: u32,
    /// Expected share in percent
    pub expected_pct: f64,
    /// Observed share in percent
    pub observed_pct: f64,
    /// How often each name of the pool came up
    pub names: BTreeMap<String, u32>,
}

impl TierStats {
    pub fn deviation_pct(&self) -> f64 {
        (self.observed_pct - self.expected_pct).abs()
    }
}

/// Aggregated results from one simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub draws: u32,
    pub seed: Option<u64>,
    /// In table order
    pub tiers: Vec<TierStats>,
}

impl SimReport {
    pub fn new(table: &WeightTable, draws: u32, seed: Option<u64>) -> Self {
        let tiers = table
            .tiers()
            .iter()
            .map(|tier| TierStats {
                rarity: tier.rarity,
                weight: tier.weight,
                count: 0,
                expected_pct: table.probability(tier.rarity) * 100.0,
                observed_pct: 0.0,
                names: tier.names.iter().map(|n| (n.clone(), 0)).collect(),
            })
            .collect();

        Self { draws, seed, tiers }
    }

    pub fn record(&mut self, item: &Item) {
        if let Some(stats) = self.tiers.iter_mut().find(|t| t.rarity == item.rarity) {
            stats.count += 1;
            *stats.names.entry(item.name.clone()).or_insert(0) += 1;
        }
    }

    /// Recomputes observed percentages from the counts.
    pub fn finish(&mut self) {
        let total: u32 = self.tiers.iter().map(|t| t.count).sum();
        for stats in &mut self.tiers {
            stats.observed_pct = if total == 0 {
                0.0
            } else {
                stats.count as f64 / total as f64 * 100.0
            };
        }
    }

    pub fn tier(&self, rarity: Rarity) -> Option<&TierStats> {
        self.tiers.iter().find(|t| t.rarity == rarity)
    }

    /// Largest absolute gap between observed and expected, in percent.
    pub fn max_deviation_pct(&self) -> f64 {
        self.tiers
            .iter()
            .map(TierStats::deviation_pct)
            .fold(0.0, f64::max)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  DRAW DISTRIBUTION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Draws: {}\n", self.draws));
        if let Some(seed) = self.seed {
            report.push_str(&format!("Seed:  {}\n", seed));
        }
        report.push('\n');

        report.push_str("── TIERS ────────────────────────────────────────────────────────\n");
        report.push_str("  Tier      Weight     Count  Expected  Observed   Delta\n");
        for t in &self.tiers {
            report.push_str(&format!(
                "  {:<8} {:>7} {:>9} {:>8.2}% {:>8.2}% {:>6.2}\n",
                t.rarity.name(),
                t.weight,
                t.count,
                t.expected_pct,
                t.observed_pct,
                t.observed_pct - t.expected_pct
            ));
        }
        report.push_str(&format!(
            "\n  Max deviation: {:.3} percentage points\n\n",
            self.max_deviation_pct()
        ));

        report.push_str("── NAMES ────────────────────────────────────────────────────────\n");
        for t in &self.tiers {
            report.push_str(&format!("  {}\n", t.rarity.name()));
            for (name, count) in &t.names {
                let pct = if t.count == 0 {
                    0.0
                } else {
                    *count as f64 / t.count as f64 * 100.0
                };
                let bar: String = "█".repeat((pct / 2.0) as usize);
                report.push_str(&format!("    {:<20} {:>5.1}% {}\n", name, pct, bar));
            }
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
