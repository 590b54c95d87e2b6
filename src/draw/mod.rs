//! Rarity tiers, weight tables and the weighted draw engine.

pub mod engine;
pub mod item;
pub mod random;
pub mod rarity;
pub mod table;

pub use engine::*;
pub use item::*;
pub use random::*;
pub use rarity::*;
pub use table::*;
