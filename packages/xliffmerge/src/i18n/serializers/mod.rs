//! Serializers Module
//!
//! Dialect adapters for the supported translation file formats.

pub mod serializer;
pub mod xliff;
pub mod xmb;

// Re-export commonly used items
pub use serializer::{ContainerPath, Serializer};
pub use xliff::Xliff;
pub use xmb::Xmb;
