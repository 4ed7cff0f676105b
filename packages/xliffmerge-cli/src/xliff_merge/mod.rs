//! XliffMerge
//!
//! Runs one merge of the master file into every configured language.

pub mod src;


pub use src::*;
