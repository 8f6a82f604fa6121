use crate::config::{LoggerConfig, LoggerConfigPatch};
use crate::logger::Logger;
use crate::sink::{ConsoleSink, Sink};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Shared state behind every logger handle a factory produces: the live
/// config cell, the output sink, and the persist-failure counter.
pub(crate) struct LoggerCore {
    pub(crate) config: RwLock<LoggerConfig>,
    pub(crate) sink: Arc<dyn Sink>,
    pub(crate) persist_failures: AtomicU64,
}

/// Owns one configuration cell and one sink, and hands out [`Logger`]
/// handles bound to it.
///
/// The process-wide singleton behind [`create_logger`] is one of these,
/// wired to a [`ConsoleSink`]; embedders and tests can build private
/// factories with their own sinks instead.
#[derive(Clone)]
pub struct LoggerFactory {
    core: Arc<LoggerCore>,
}

impl LoggerFactory {
    /// Factory writing to the process console.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(ConsoleSink))
    }

    /// Factory writing to a caller-supplied sink.
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            core: Arc::new(LoggerCore {
                config: RwLock::new(LoggerConfig::default()),
                sink,
                persist_failures: AtomicU64::new(0),
            }),
        }
    }

    /// Create a logger bound to a fixed context label. Its behavior at call
    /// time follows this factory's live config, never a snapshot.
    pub fn logger(&self, context: &str) -> Logger {
        Logger::new(context.to_string(), Arc::clone(&self.core))
    }

    /// Shallow-merge a patch into the live config; fields the patch leaves
    /// unset keep their current values.
    pub fn set_config(&self, patch: LoggerConfigPatch) {
        patch.apply(&mut self.core.config.write());
    }

    /// Defensive copy of the live config: mutating the returned value has no
    /// effect on this factory.
    pub fn config(&self) -> LoggerConfig {
        self.core.config.read().clone()
    }

    /// Restore defaults: enabled, text output, build-dependent minimum
    /// level, no persist handler. Intended for test isolation.
    pub fn reset_config(&self) {
        *self.core.config.write() = LoggerConfig::default();
    }

    /// Number of persist-handler invocations that panicked and were
    /// discarded. The only observable trace of a faulty handler.
    pub fn persist_failures(&self) -> u64 {
        self.core.persist_failures.load(Ordering::Relaxed)
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

// Process-wide singleton, wired once at first use.
static GLOBAL: LazyLock<LoggerFactory> = LazyLock::new(LoggerFactory::new);

/// Create a logger on the process-wide factory.
pub fn create_logger(context: &str) -> Logger {
    GLOBAL.logger(context)
}

/// Patch the process-wide config. Takes effect immediately for every logger
/// handle already created, including children.
pub fn set_logger_config(patch: LoggerConfigPatch) {
    GLOBAL.set_config(patch);
}

/// Defensive copy of the process-wide config.
pub fn get_logger_config() -> LoggerConfig {
    GLOBAL.config()
}

/// Restore the process-wide config to defaults.
pub fn reset_logger_config() {
    GLOBAL.reset_config();
}

/// Discarded persist-handler failures on the process-wide factory.
pub fn persist_failure_count() -> u64 {
    GLOBAL.persist_failures()
}
