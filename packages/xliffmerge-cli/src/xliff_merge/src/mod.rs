pub mod xliff_merge;

pub use xliff_merge::*;
