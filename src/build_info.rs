//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `gacha 0.1.0 (2026-10-17 abc1234)`
pub fn version_line(bin: &str) -> String {
    format!("{bin} {BUILD_VERSION} ({BUILD_DATE} {BUILD_COMMIT})")
}
