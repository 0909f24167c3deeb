//! Dataset cache statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for dataset cache activity.
///
/// Counters are incremented from request handler threads without any
/// lock, then read as a consistent-enough [`DatasetStatsSnapshot`] for
/// health reporting and panic-time state dumps.
#[derive(Debug, Default)]
pub struct DatasetStats {
    hits: AtomicU64,
    reloads: AtomicU64,
    reload_failures: AtomicU64,
    stale_serves: AtomicU64,
}

impl DatasetStats {
    /// Create a new zeroed statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request served directly from the cached dataset.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful dataset (re)load.
    pub fn record_reload(&self) {
        self.reloads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed dataset (re)load.
    pub fn record_reload_failure(&self) {
        self.reload_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request served stale data while a reload was in flight
    /// or after a reload failed.
    pub fn record_stale_serve(&self) {
        self.stale_serves.fetch_add(1, Ordering::Relaxed);
    }

    /// Capture current counter values.
    pub fn snapshot(&self) -> DatasetStatsSnapshot {
        DatasetStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            reloads: self.reloads.load(Ordering::Relaxed),
            reload_failures: self.reload_failures.load(Ordering::Relaxed),
            stale_serves: self.stale_serves.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of [`DatasetStats`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStatsSnapshot {
    pub hits: u64,
    pub reloads: u64,
    pub reload_failures: u64,
    pub stale_serves: u64,
}

impl fmt::Display for DatasetStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} reloads={} reload_failures={} stale_serves={}",
            self.hits, self.reloads, self.reload_failures, self.stale_serves
        )
    }
}
