//! In-memory logger for test assertions.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;
use std::sync::Mutex;

/// A logger that records every message in memory.
///
/// Tests hand this to a component, run the code under test, then assert
/// on the captured output. A poisoned lock drops the message rather than
/// panicking inside the component being tested.
///
/// # Example
///
/// ```
/// use floodtile::log::{Logger, LogLevel, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.warn(format_args!("reload failed"));
/// assert!(logger.contains(LogLevel::Warn, "reload failed"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    /// Create a new empty memory logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of all captured entries in arrival order.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// True if any captured message at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    /// Number of captured messages at `level`.
    pub fn count_at(&self, level: LogLevel) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push((level, args.to_string()));
        }
    }
}
