use super::log_level::LogLevel;
use super::payload::Payload;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The structured representation of one log event, built per call and handed
/// to the formatter and the persist handler. The core never stores entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Emission time, rendered as an RFC 3339 / ISO 8601 string.
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Hierarchical origin label, `:`-joined segments.
    pub context: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

impl LogEntry {
    pub fn new(level: LogLevel, context: &str, message: &str, data: Option<Payload>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            context: context.to_string(),
            message: message.to_string(),
            data,
        }
    }
}
