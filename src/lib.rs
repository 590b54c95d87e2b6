//! Gacha - Terminal Loot-Box Simulator Library
//!
//! A player sets a draw budget once, then spends it one draw at a time on
//! weighted-random items that accumulate into a persistent collection.
//! This crate exposes the session state machine, the draw engine and the
//! stores for the terminal front end, the simulator and tests.

pub mod build_info;
pub mod core;
pub mod draw;
pub mod input;
pub mod simulator;
pub mod storage;
pub mod ui;

pub use crate::core::{GachaConfig, GachaError, GachaMachine, Phase, Session};
pub use crate::draw::{Item, Rarity, WeightTable};
