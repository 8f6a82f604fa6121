#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. LoggerConfig in config module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

//! Structured, leveled logging with hierarchical contexts.
//!
//! A [`LoggerFactory`] owns one live configuration cell and one console-like
//! [`Sink`]; the [`Logger`] handles it produces filter each call against the
//! current config, build a structured [`LogEntry`], render it as text or
//! JSON, write the line to the level-matched sink channel, and best-effort
//! forward the structured entry to an optional persist handler. Nothing in
//! the public API returns an error or panics: bad level strings fall back,
//! faulty handlers are contained, serialization cannot fail.
//!
//! The free functions ([`create_logger`], [`set_logger_config`], …) operate
//! on a process-wide factory wired to the console, which is what application
//! modules normally use.

pub mod config;
pub mod domain;
pub mod factory;
pub mod format;
pub mod logger;
pub mod sink;

pub use config::{LoggerConfig, LoggerConfigPatch, PersistHandler, default_min_level};
pub use domain::{ErrorDetails, LogEntry, LogLevel, ParseLevelError, Payload, parse_log_level};
pub use factory::{
    LoggerFactory, create_logger, get_logger_config, persist_failure_count, reset_logger_config,
    set_logger_config,
};
pub use logger::Logger;
pub use sink::{ConsoleSink, MemorySink, Sink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
