//! Tile rendering statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for tile render outcomes.
#[derive(Debug, Default)]
pub struct RenderStats {
    rendered: AtomicU64,
    no_data: AtomicU64,
    degraded: AtomicU64,
}

impl RenderStats {
    /// Create a new zeroed statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a normally rendered tile.
    pub fn record_rendered(&self) {
        self.rendered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a tile served the empty fallback because no data was loaded.
    pub fn record_no_data(&self) {
        self.no_data.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a tile served the empty fallback after a stage failure.
    pub fn record_degraded(&self) {
        self.degraded.fetch_add(1, Ordering::Relaxed);
    }

    /// Capture current counter values.
    pub fn snapshot(&self) -> RenderStatsSnapshot {
        RenderStatsSnapshot {
            rendered: self.rendered.load(Ordering::Relaxed),
            no_data: self.no_data.load(Ordering::Relaxed),
            degraded: self.degraded.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of [`RenderStats`] counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStatsSnapshot {
    pub rendered: u64,
    pub no_data: u64,
    pub degraded: u64,
}

impl RenderStatsSnapshot {
    /// Total tile requests that reached the pipeline.
    pub fn total(&self) -> u64 {
        self.rendered + self.no_data + self.degraded
    }
}

impl fmt::Display for RenderStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rendered={} no_data={} degraded={}",
            self.rendered, self.no_data, self.degraded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_and_total() {
        let stats = RenderStats::new();
        stats.record_rendered();
        stats.record_rendered();
        stats.record_no_data();
        stats.record_degraded();

        let snap = stats.snapshot();
        assert_eq!(snap.rendered, 2);
        assert_eq!(snap.no_data, 1);
        assert_eq!(snap.degraded, 1);
        assert_eq!(snap.total(), 4);
    }

    #[test]
    fn test_display() {
        let stats = RenderStats::new();
        stats.record_no_data();
        assert_eq!(
            stats.snapshot().to_string(),
            "rendered=0 no_data=1 degraded=0"
        );
    }
}
