//! Configuration
//!
//! Command line options, the JSON profile and the validated parameters of a
//! run.

pub mod src;


pub use src::*;
