//! Logging capability injected into the organizer.
//!
//! The organizer never talks to a global logger. It receives a `&dyn Logger`,
//! which in the binary forwards to `tracing` and in tests records every line.

use std::cell::RefCell;

/// Line-oriented, human-readable log sink.
pub trait Logger {
    /// Reports normal progress.
    fn info(&self, message: &str);

    /// Reports a failure.
    fn error(&self, message: &str);
}

/// Forwards log lines to the `tracing` subscriber installed by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Severity of a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// A single recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every line in memory, in order.
///
/// # Examples
///
/// ```
/// use organize::logger::{Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.info("hello");
/// logger.error("oops");
/// assert_eq!(logger.infos(), vec!["hello".to_string()]);
/// assert_eq!(logger.errors(), vec!["oops".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded line.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.borrow().clone()
    }

    /// Returns the messages logged with `info`.
    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    /// Returns the messages logged with `error`.
    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.message.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records.borrow_mut().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}
