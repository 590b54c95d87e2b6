//! Weighted draw engine: categorical sampling by linear scan.
//!
//! A uniform sample `u` in `[0, 1)` is scaled to `r = u * total_weight`, then
//! tiers are visited in table order. The first tier with `r < weight` wins;
//! otherwise its weight is subtracted and the scan continues. Each tier
//! therefore owns the half-open interval `[cumulative, cumulative + weight)`,
//! and a sample landing exactly on a boundary belongs to the later tier.

use super::item::Item;
use super::random::{clamp_unit, RandomSource};
use super::rarity::Rarity;
use super::table::{Tier, WeightTable};
use crate::core::constants::{IMAGE_SIZE_PX, IMAGE_URL_BASE};
use uuid::Uuid;

/// Picks a tier with probability `weight / total_weight`.
pub fn select_tier<'a, R: RandomSource + ?Sized>(table: &'a WeightTable, rng: &mut R) -> &'a Tier {
    let tiers = table.tiers();
    let mut roll = clamp_unit(rng.next_unit()) * table.total_weight() as f64;

    for tier in tiers {
        let weight = tier.weight as f64;
        if roll < weight {
            return tier;
        }
        roll -= weight;
    }

    // Only reachable through float rounding at the very top of the range.
    &tiers[tiers.len() - 1]
}

pub fn select_rarity<R: RandomSource + ?Sized>(table: &WeightTable, rng: &mut R) -> Rarity {
    select_tier(table, rng).rarity
}

/// Maps a unit sample to an index in `0..len`. `len` must be non-zero.
pub fn pick_index(len: usize, unit: f64) -> usize {
    let index = (clamp_unit(unit) * len as f64).floor() as usize;
    index.min(len - 1)
}

pub fn image_url(name: &str, obtained_at: i64) -> String {
    let seed: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{IMAGE_URL_BASE}/{seed}{obtained_at}/{IMAGE_SIZE_PX}/{IMAGE_SIZE_PX}")
}

/// Draws one item: a tier roll, then an independent roll over that tier's
/// name pool.
pub fn select_item<R: RandomSource + ?Sized>(
    table: &WeightTable,
    rng: &mut R,
    obtained_at: i64,
) -> Item {
    let tier = select_tier(table, rng);
    let name = tier.names[pick_index(tier.names.len(), rng.next_unit())].clone();

    Item {
        id: Uuid::new_v4().to_string(),
        rarity: tier.rarity,
        image: image_url(&name, obtained_at),
        name,
        obtained_at,
    }
}
