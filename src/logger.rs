use crate::domain::{LogEntry, LogLevel, Payload};
use crate::factory::LoggerCore;
use crate::format;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// A handle bound to a fixed context label.
///
/// Immutable once created; cheap to clone. Every call re-reads the owning
/// factory's live config, so config changes apply retroactively to all
/// existing handles at any nesting depth.
#[derive(Clone)]
pub struct Logger {
    context: String,
    core: Arc<LoggerCore>,
}

impl Logger {
    pub(crate) fn new(context: String, core: Arc<LoggerCore>) -> Self {
        Self { context, core }
    }

    /// The bound context label, fixed at construction.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Derive a new independent logger with context `parent:sub`. Composes
    /// associatively to arbitrary depth; the parent is untouched and
    /// siblings do not interfere.
    pub fn child(&self, sub_context: &str) -> Logger {
        Logger {
            context: format!("{}:{}", self.context, sub_context),
            core: Arc::clone(&self.core),
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    pub fn debug_with(&self, message: &str, data: impl Into<Payload>) {
        self.log(LogLevel::Debug, message, Some(data.into()));
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    pub fn info_with(&self, message: &str, data: impl Into<Payload>) {
        self.log(LogLevel::Info, message, Some(data.into()));
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, None);
    }

    pub fn warn_with(&self, message: &str, data: impl Into<Payload>) {
        self.log(LogLevel::Warn, message, Some(data.into()));
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    pub fn error_with(&self, message: &str, data: impl Into<Payload>) {
        self.log(LogLevel::Error, message, Some(data.into()));
    }

    /// Dispatch one call: filter against the live config, build the entry,
    /// render, write to the level-matched sink, then hand the structured
    /// entry to the persist handler under a panic guard.
    ///
    /// Suppressed calls return before any entry is built. A panicking
    /// handler never propagates to the caller and cannot undo the sink
    /// write that precedes it; it only bumps the failure counter.
    pub fn log(&self, level: LogLevel, message: &str, data: Option<Payload>) {
        if level == LogLevel::Silent {
            return;
        }
        let config = self.core.config.read().clone();
        if !config.enabled || level < config.min_level {
            return;
        }

        let entry = LogEntry::new(level, &self.context, message, data);
        let line = format::render(&entry, config.json);
        self.core.sink.write(level, &line);

        if let Some(handler) = config.persist_handler
            && catch_unwind(AssertUnwindSafe(|| handler(&entry))).is_err()
        {
            self.core.persist_failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("context", &self.context)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfigPatch;
    use crate::factory::LoggerFactory;
    use crate::sink::MemorySink;
    use serde_json::json;

    fn capture() -> (LoggerFactory, Arc<MemorySink>) {
        let sink = MemorySink::new();
        let factory = LoggerFactory::with_sink(sink.clone());
        factory.set_config(LoggerConfigPatch::new().min_level(LogLevel::Debug));
        (factory, sink)
    }

    #[test]
    fn test_child_context_composes() {
        let (factory, _sink) = capture();
        let logger = factory.logger("a");
        assert_eq!(logger.child("b").child("c").context(), "a:b:c");
    }

    #[test]
    fn test_child_does_not_mutate_parent_or_siblings() {
        let (factory, _sink) = capture();
        let parent = factory.logger("parent");
        let first = parent.child("first");
        let second = parent.child("second");

        assert_eq!(parent.context(), "parent");
        assert_eq!(first.context(), "parent:first");
        assert_eq!(second.context(), "parent:second");
    }

    #[test]
    fn test_each_level_reaches_its_own_sink_channel() {
        let (factory, sink) = capture();
        let logger = factory.logger("ch");
        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");

        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(sink.count(level), 1, "level {level}");
        }
    }

    #[test]
    fn test_silent_level_is_never_emitted() {
        let (factory, sink) = capture();
        factory.logger("ch").log(LogLevel::Silent, "nothing", None);
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn test_suppressed_call_skips_persist_handler() {
        let sink = MemorySink::new();
        let factory = LoggerFactory::with_sink(sink.clone());
        let calls = Arc::new(std::sync::atomic::AtomicU64::new(0));
        let counted = Arc::clone(&calls);
        factory.set_config(
            LoggerConfigPatch::new()
                .min_level(LogLevel::Warn)
                .persist_handler(Arc::new(move |_entry| {
                    counted.fetch_add(1, Ordering::Relaxed);
                })),
        );

        let logger = factory.logger("hot");
        logger.debug("skipped");
        logger.info("skipped");
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert_eq!(sink.total(), 0);

        logger.warn("kept");
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_persist_handler_receives_structured_entry() {
        let sink = MemorySink::new();
        let factory = LoggerFactory::with_sink(sink);
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let captured = Arc::clone(&seen);
        factory.set_config(LoggerConfigPatch::new().persist_handler(Arc::new(
            move |entry: &LogEntry| {
                captured.lock().push(entry.clone());
            },
        )));

        factory
            .logger("store")
            .info_with("saved", json!({"id": 42}));

        let entries = seen.lock();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[0].context, "store");
        assert_eq!(entries[0].message, "saved");
        assert_eq!(entries[0].data, Some(Payload::Plain(json!({"id": 42}))));
    }

    #[test]
    fn test_panicking_handler_is_contained() {
        let sink = MemorySink::new();
        let factory = LoggerFactory::with_sink(sink.clone());
        factory.set_config(
            LoggerConfigPatch::new().persist_handler(Arc::new(|_entry| {
                panic!("handler exploded");
            })),
        );

        let logger = factory.logger("guarded");
        logger.info("still emitted");

        // sink write happened exactly once and the call did not propagate
        assert_eq!(sink.count(LogLevel::Info), 1);
        assert_eq!(factory.persist_failures(), 1);

        logger.info("again");
        assert_eq!(sink.count(LogLevel::Info), 2);
        assert_eq!(factory.persist_failures(), 2);
    }
}
