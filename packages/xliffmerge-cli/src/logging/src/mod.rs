pub mod buffer_logger;
pub mod console_logger;
pub mod logger;

pub use buffer_logger::*;
pub use console_logger::*;
pub use logger::*;
