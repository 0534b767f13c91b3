//! # Built-in subscribers
//!
//! - [`LogWriter`]: forwards framework events to `tracing` (demo/debug).

mod log;

pub use log::LogWriter;
