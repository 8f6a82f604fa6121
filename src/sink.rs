use crate::domain::LogLevel;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Console-like output channel with one method per severity.
///
/// The dispatcher routes each rendered line to the method matching its
/// level. Implementations must not panic; writes are fire-and-forget.
pub trait Sink: Send + Sync {
    fn debug(&self, line: &str);
    fn info(&self, line: &str);
    fn warn(&self, line: &str);
    fn error(&self, line: &str);

    /// Route a line to the level-matched method. `Silent` carries no
    /// output channel and is dropped.
    fn write(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Debug => self.debug(line),
            LogLevel::Info => self.info(line),
            LogLevel::Warn => self.warn(line),
            LogLevel::Error => self.error(line),
            LogLevel::Silent => {}
        }
    }
}

/// Default sink: debug and info lines to stdout, warn and error to stderr.
/// I/O errors are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn debug(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }

    fn info(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }

    fn warn(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn error(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
}

/// In-memory capture sink for tests and embedding hosts that surface log
/// lines in their own UI.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, level: LogLevel, line: &str) {
        self.lines.lock().push((level, line.to_string()));
    }

    /// All captured lines for one level, in emission order.
    pub fn lines(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Number of lines captured for one level.
    pub fn count(&self, level: LogLevel) -> usize {
        self.lines.lock().iter().filter(|(l, _)| *l == level).count()
    }

    /// Total number of captured lines across all levels.
    pub fn total(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn debug(&self, line: &str) {
        self.push(LogLevel::Debug, line);
    }

    fn info(&self, line: &str) {
        self.push(LogLevel::Info, line);
    }

    fn warn(&self, line: &str) {
        self.push(LogLevel::Warn, line);
    }

    fn error(&self, line: &str) {
        self.push(LogLevel::Error, line);
    }
}
