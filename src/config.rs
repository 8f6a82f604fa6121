use crate::domain::{LogEntry, LogLevel};
use std::fmt;
use std::sync::Arc;

/// Host-supplied callback receiving every emitted entry in structured form.
///
/// Invoked synchronously after the sink write, inside a guard: a handler
/// that panics never surfaces to the logging caller and never undoes the
/// sink write. A handler needing asynchronous persistence must dispatch to
/// its own background machinery internally.
pub type PersistHandler = Arc<dyn Fn(&LogEntry) + Send + Sync>;

/// Live settings consulted on every logging call.
///
/// There is no per-logger snapshot: changing the config on a factory takes
/// effect immediately for every handle it has ever produced.
#[derive(Clone)]
pub struct LoggerConfig {
    /// Entries below this level are suppressed before any work happens.
    pub min_level: LogLevel,
    /// Render entries as single-line JSON instead of human-readable text.
    pub json: bool,
    /// Master switch; `false` suppresses every level including `Error`.
    pub enabled: bool,
    /// Best-effort persistence side channel. Replaced by overwriting;
    /// removed by patching in `None` explicitly via [`LoggerConfigPatch::clear_persist_handler`].
    pub persist_handler: Option<PersistHandler>,
}

/// Default minimum level: everything in debug builds, `Info` otherwise.
pub fn default_min_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            json: false,
            enabled: true,
            persist_handler: None,
        }
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("min_level", &self.min_level)
            .field("json", &self.json)
            .field("enabled", &self.enabled)
            .field(
                "persist_handler",
                if self.persist_handler.is_some() {
                    &"Some(..)"
                } else {
                    &"None"
                },
            )
            .finish()
    }
}

/// Shallow-merge patch for [`LoggerConfig`]: fields left unset keep their
/// current value.
#[derive(Clone, Default)]
pub struct LoggerConfigPatch {
    min_level: Option<LogLevel>,
    json: Option<bool>,
    enabled: Option<bool>,
    persist_handler: Option<Option<PersistHandler>>,
}

impl LoggerConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.json = Some(json);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn persist_handler(mut self, handler: PersistHandler) -> Self {
        self.persist_handler = Some(Some(handler));
        self
    }

    /// Explicitly remove the installed handler.
    pub fn clear_persist_handler(mut self) -> Self {
        self.persist_handler = Some(None);
        self
    }

    pub(crate) fn apply(self, config: &mut LoggerConfig) {
        if let Some(min_level) = self.min_level {
            config.min_level = min_level;
        }
        if let Some(json) = self.json {
            config.json = json;
        }
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(handler) = self.persist_handler {
            config.persist_handler = handler;
        }
    }
}

impl fmt::Debug for LoggerConfigPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfigPatch")
            .field("min_level", &self.min_level)
            .field("json", &self.json)
            .field("enabled", &self.enabled)
            .field(
                "persist_handler",
                if self.persist_handler.is_some() {
                    &"Some(..)"
                } else {
                    &"None"
                },
            )
            .finish()
    }
}
