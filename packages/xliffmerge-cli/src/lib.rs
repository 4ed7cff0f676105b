#![deny(clippy::all)]

/**
 * xliffmerge CLI
 *
 * Options, profile handling, logging and the merge command behind the
 * `xliffmerge` binary.
 */
// Re-export the engine for convenience
pub use xliffmerge as engine;

pub mod config;
pub mod logging;
pub mod version;
pub mod xliff_merge;

/// CLI version
pub fn version() -> &'static str {
    version::VERSION
}
