//! Session state machine, its controller, configuration and errors.

pub mod config;
pub mod constants;
pub mod error;
pub mod machine;
pub mod session;

pub use config::*;
pub use error::*;
pub use machine::*;
pub use session::*;
