//! Domain layer for openflow-log.
//!
//! Contains the canonical types shared across all modules:
//! - `LogEntry`: the structured form of one log event
//! - `LogLevel`: ordered severity (Debug/Info/Warn/Error/Silent)
//! - `Payload` / `ErrorDetails`: typed entry data with error projection

pub mod log_entry;
pub mod log_level;
pub mod payload;

pub use log_entry::LogEntry;
pub use log_level::{LogLevel, ParseLevelError, parse_log_level};
pub use payload::{ErrorDetails, Payload};
