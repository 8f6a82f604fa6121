use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log entry, ordered from least to most severe.
///
/// `Silent` sits above every real level and admits nothing: a config whose
/// minimum level is `Silent` suppresses all entries, and `Silent` itself is
/// never a valid entry level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Silent = 4,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl LogLevel {
    /// Uppercase canonical name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Silent => "SILENT",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Case-insensitive parse accepting the aliases `warning` for `Warn`
    /// and `none`/`off` for `Silent`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" | "none" | "off" => Ok(LogLevel::Silent),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Parse a level string, falling back to `Info` on any unrecognized input.
///
/// This is the forgiving entry point for startup paths that read the level
/// from an environment variable: a typo must select a sane default rather
/// than take the process down. Callers that want to report bad input use
/// `LogLevel::from_str` directly.
pub fn parse_log_level(value: &str) -> LogLevel {
    value.parse().unwrap_or(LogLevel::Info)
}
