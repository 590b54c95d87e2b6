//! Session persistence: record format and stores.

pub mod record;
pub mod store;

pub use record::*;
pub use store::*;
