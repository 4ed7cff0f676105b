pub mod error;
pub mod options;
pub mod parameters;
pub mod profile;

pub use error::*;
pub use options::*;
pub use parameters::*;
pub use profile::*;
