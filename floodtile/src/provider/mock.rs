//! Mock feature provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::coord::Crs;
use crate::geometry::{Feature, FeatureSet, IngestReport};
use crate::provider::types::{FeatureProvider, ProviderError};

/// Scriptable in-memory provider.
///
/// Records every load call so cache tests can assert on reload behavior,
/// and optionally starts failing after a fixed number of successful loads
/// to exercise keep-stale-on-failure paths.
pub struct MockFeatureProvider {
    features: Vec<Feature>,
    skipped: usize,
    fail_after: Option<usize>,
    loads: AtomicUsize,
    sources: Mutex<Vec<String>>,
}

impl MockFeatureProvider {
    /// Provider that always succeeds, returning clones of `features`.
    pub fn with_features(features: Vec<Feature>) -> Self {
        Self {
            features,
            skipped: 0,
            fail_after: None,
            loads: AtomicUsize::new(0),
            sources: Mutex::new(Vec::new()),
        }
    }

    /// Provider that fails every load.
    pub fn failing() -> Self {
        let mut provider = Self::with_features(Vec::new());
        provider.fail_after = Some(0);
        provider
    }

    /// Provider that succeeds for the first `limit` loads, then fails.
    pub fn fail_after(features: Vec<Feature>, limit: usize) -> Self {
        let mut provider = Self::with_features(features);
        provider.fail_after = Some(limit);
        provider
    }

    /// Attach a skipped-record count to every successful load.
    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    /// Total number of load calls made.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Source identifiers passed to load, in call order.
    pub fn sources(&self) -> Vec<String> {
        self.sources.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl FeatureProvider for MockFeatureProvider {
    fn load_features(&self, source_id: &str) -> Result<IngestReport, ProviderError> {
        let call = self.loads.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.sources.lock() {
            guard.push(source_id.to_string());
        }

        if let Some(limit) = self.fail_after {
            if call >= limit {
                return Err(ProviderError::Io {
                    source_id: source_id.to_string(),
                    detail: "mock provider exhausted".to_string(),
                });
            }
        }

        Ok(IngestReport {
            feature_set: FeatureSet::new(source_id, Crs::Geographic, self.features.clone()),
            skipped: self.skipped,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coord, Geometry};

    fn point_feature() -> Feature {
        Feature::bare(Geometry::Point(Coord { x: 1.0, y: 2.0 }))
    }

    #[test]
    fn test_records_loads_and_sources() {
        let provider = MockFeatureProvider::with_features(vec![point_feature()]);

        let report = provider.load_features("a").unwrap();
        assert_eq!(report.feature_set.len(), 1);
        assert_eq!(report.feature_set.source_id(), "a");

        provider.load_features("b").unwrap();
        assert_eq!(provider.loads(), 2);
        assert_eq!(provider.sources(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_fail_after_limit() {
        let provider = MockFeatureProvider::fail_after(vec![point_feature()], 1);

        assert!(provider.load_features("a").is_ok());
        assert!(provider.load_features("a").is_err());
        assert_eq!(provider.loads(), 2);
    }

    #[test]
    fn test_failing_never_succeeds() {
        let provider = MockFeatureProvider::failing();
        assert!(provider.load_features("a").is_err());
    }
}
