//! Single-entry dataset cache with coordinated reload.

use std::sync::{Arc, Mutex, RwLock, TryLockError};
use std::time::Instant;

use crate::geometry::FeatureSet;
use crate::log::Logger;
use crate::provider::FeatureProvider;
use crate::{log_error, log_info, log_warn};

use super::stats::{DatasetStats, DatasetStatsSnapshot};

/// Caches the single active flood dataset behind an atomic swap.
///
/// The cache holds at most one dataset at a time. A request whose source
/// identifier matches the cached dataset is served from memory; a mismatch
/// or an empty cache triggers a reload through the provider. Reloads are
/// single-flight: one thread performs the load while concurrent requests
/// either serve the previous dataset (if any) or wait for the load to
/// finish.
///
/// A failed reload never evicts: the call that hit the failure reports no
/// data, while the previous dataset stays in place and keeps serving
/// requests for its own source until a reload succeeds.
pub struct DatasetCache {
    provider: Arc<dyn FeatureProvider>,
    logger: Arc<dyn Logger>,
    current: RwLock<Option<Arc<FeatureSet>>>,
    reload_gate: Mutex<()>,
    stats: DatasetStats,
}

impl DatasetCache {
    /// Create an empty cache backed by the given provider.
    pub fn new(provider: Arc<dyn FeatureProvider>, logger: Arc<dyn Logger>) -> Self {
        Self {
            provider,
            logger,
            current: RwLock::new(None),
            reload_gate: Mutex::new(()),
            stats: DatasetStats::new(),
        }
    }

    /// Resolve the dataset for `source_id`, reloading if necessary.
    ///
    /// Returns `None` when no dataset for `source_id` could be produced:
    /// the load failed, or an in-flight load this request waited on came
    /// up empty. Callers treat `None` as "render an empty tile".
    pub fn feature_set(&self, source_id: &str) -> Option<Arc<FeatureSet>> {
        if let Some(set) = self.cached_if_matching(source_id) {
            self.stats.record_hit();
            return Some(set);
        }
        self.resolve_slow(source_id)
    }

    /// Read-only view of whatever dataset is currently cached.
    ///
    /// Never triggers a reload and never touches the request counters, so
    /// health checks can poll it freely.
    pub fn current(&self) -> Option<Arc<FeatureSet>> {
        self.current
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(Arc::clone))
    }

    /// Snapshot of cache activity counters.
    pub fn stats(&self) -> DatasetStatsSnapshot {
        self.stats.snapshot()
    }

    /// Name of the backing provider, for logging.
    pub fn provider_name(&self) -> String {
        self.provider.name().to_string()
    }

    fn cached_if_matching(&self, source_id: &str) -> Option<Arc<FeatureSet>> {
        self.current.read().ok().and_then(|guard| {
            guard
                .as_ref()
                .filter(|set| set.source_id() == source_id)
                .map(Arc::clone)
        })
    }

    fn cached_any(&self) -> Option<Arc<FeatureSet>> {
        self.current
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(Arc::clone))
    }

    fn resolve_slow(&self, source_id: &str) -> Option<Arc<FeatureSet>> {
        // The gate guards no data, so a poisoned lock is safe to reclaim.
        let _gate = match self.reload_gate.try_lock() {
            Ok(gate) => gate,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                // A reload is in flight on another thread.
                if let Some(stale) = self.cached_any() {
                    self.stats.record_stale_serve();
                    return Some(stale);
                }
                // Nothing to serve yet. Wait for the in-flight load and
                // take whatever it produced.
                drop(self.reload_gate.lock());
                let result = self.cached_if_matching(source_id);
                if result.is_some() {
                    self.stats.record_hit();
                }
                return result;
            }
        };

        // Won the gate. Re-check before loading: another thread may have
        // completed the reload between our miss and the lock acquisition.
        if let Some(set) = self.cached_if_matching(source_id) {
            self.stats.record_hit();
            return Some(set);
        }
        self.load_and_swap(source_id)
    }

    /// Load `source_id` through the provider and swap it in.
    ///
    /// Caller must hold the reload gate.
    fn load_and_swap(&self, source_id: &str) -> Option<Arc<FeatureSet>> {
        log_info!(self.logger, "Loading dataset from '{}'", source_id);
        let started = Instant::now();

        match self.provider.load_features(source_id) {
            Ok(report) => {
                if report.skipped > 0 {
                    log_warn!(
                        self.logger,
                        "Skipped {} malformed feature record(s) in '{}'",
                        report.skipped,
                        source_id
                    );
                }
                let set = Arc::new(report.feature_set);
                log_info!(
                    self.logger,
                    "Loaded {} feature(s) from '{}' via {} in {:?}",
                    set.len(),
                    source_id,
                    self.provider.name(),
                    started.elapsed()
                );
                if let Ok(mut guard) = self.current.write() {
                    *guard = Some(Arc::clone(&set));
                }
                self.stats.record_reload();
                Some(set)
            }
            Err(err) => {
                self.stats.record_reload_failure();
                // The previously cached dataset, if any, stays in place
                // for its own source; this call reports no data.
                if self.cached_any().is_some() {
                    log_warn!(
                        self.logger,
                        "Dataset load from '{}' failed ({}); previously loaded data is retained",
                        source_id,
                        err
                    );
                } else {
                    log_error!(self.logger, "Dataset load from '{}' failed: {}", source_id, err);
                }
                None
            }
        }
    }
}
