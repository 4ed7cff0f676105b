//! Logging
//!
//! Console output of the xliffmerge run, filtered by level.

pub mod src;


pub use src::*;
