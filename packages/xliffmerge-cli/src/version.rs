//! Version
//!
//! Version information for the xliffmerge tool.

/// xliffmerge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed in verbose mode.
pub fn version_string() -> String {
    format!("xliffmerge version {}", VERSION)
}
