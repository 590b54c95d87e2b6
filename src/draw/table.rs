//! Rarity weights and per-tier name pools.
//!
//! A `WeightTable` is immutable process-wide configuration. It is validated
//! once when it is built; the draw engine relies on that and has no error path.

use super::rarity::Rarity;
use crate::core::constants::{
    BASIC_NAMES, BASIC_WEIGHT, EPIC_NAMES, EPIC_WEIGHT, HIDDEN_NAMES, HIDDEN_WEIGHT, RARE_NAMES,
    RARE_WEIGHT,
};
use crate::core::error::{GachaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// One rarity tier: its relative weight and candidate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub rarity: Rarity,
    pub weight: u32,
    pub names: Vec<String>,
}

impl Tier {
    pub fn new(rarity: Rarity, weight: u32, names: &[&str]) -> Self {
        Self {
            rarity,
            weight,
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// On-disk shape of a custom table file.
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    tiers: Vec<Tier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    tiers: Vec<Tier>,
    total_weight: u64,
}

impl WeightTable {
    /// Validates and builds a table. Tiers are scanned in the order given.
    ///
    /// Fails with `InvalidWeightTable` when a weight is zero, a name pool is
    /// empty, or a rarity is missing or listed twice.
    pub fn new(tiers: Vec<Tier>) -> Result<Self> {
        for rarity in Rarity::ALL {
            let count = tiers.iter().filter(|t| t.rarity == rarity).count();
            match count {
                0 => {
                    return Err(GachaError::InvalidWeightTable(format!(
                        "missing tier {}",
                        rarity.name()
                    )))
                }
                1 => {}
                _ => {
                    return Err(GachaError::InvalidWeightTable(format!(
                        "tier {} listed {count} times",
                        rarity.name()
                    )))
                }
            }
        }

        for tier in &tiers {
            if tier.weight == 0 {
                return Err(GachaError::InvalidWeightTable(format!(
                    "tier {} has weight 0",
                    tier.rarity.name()
                )));
            }
            if tier.names.is_empty() {
                return Err(GachaError::InvalidWeightTable(format!(
                    "tier {} has an empty name pool",
                    tier.rarity.name()
                )));
            }
        }

        let total_weight: u64 = tiers.iter().map(|t| t.weight as u64).sum();
        if total_weight == 0 {
            return Err(GachaError::InvalidWeightTable(
                "total weight is 0".to_string(),
            ));
        }

        Ok(Self {
            tiers,
            total_weight,
        })
    }

    /// The built-in table: Basic 50, Rare 35, Epic 25, Hidden 8.
    pub fn reference() -> Self {
        let tiers = vec![
            Tier::new(Rarity::Basic, BASIC_WEIGHT, &BASIC_NAMES),
            Tier::new(Rarity::Rare, RARE_WEIGHT, &RARE_NAMES),
            Tier::new(Rarity::Epic, EPIC_WEIGHT, &EPIC_NAMES),
            Tier::new(Rarity::Hidden, HIDDEN_WEIGHT, &HIDDEN_NAMES),
        ];
        let total_weight = tiers.iter().map(|t| t.weight as u64).sum();
        Self {
            tiers,
            total_weight,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)
            .map_err(|e| GachaError::InvalidWeightTable(e.to_string()))?;
        Self::new(file.tiers)
    }

    /// Loads a table file. I/O failures are storage errors; anything wrong
    /// with the content is `InvalidWeightTable`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes in the same format `from_json_str` reads.
    pub fn to_json(&self) -> Result<String> {
        let file = TableFile {
            tiers: self.tiers.clone(),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| GachaError::Storage(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn tier(&self, rarity: Rarity) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.rarity == rarity)
    }

    pub fn weight(&self, rarity: Rarity) -> u32 {
        self.tier(rarity).map(|t| t.weight).unwrap_or(0)
    }

    /// `weight / total_weight` for the given tier.
    pub fn probability(&self, rarity: Rarity) -> f64 {
        self.weight(rarity) as f64 / self.total_weight as f64
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::reference()
    }
}
