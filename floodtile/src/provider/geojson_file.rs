//! GeoJSON file provider.

use std::fs;

use crate::geometry::{ingest_geojson, IngestReport};
use crate::provider::types::{FeatureProvider, ProviderError};

/// Provider that loads features from a GeoJSON file on disk.
///
/// The source identifier is interpreted as a filesystem path. The whole
/// file is read and parsed in one pass; malformed individual records are
/// skipped by the parser and surface in the returned skip count rather
/// than failing the load.
///
/// # Example
///
/// ```ignore
/// use floodtile::provider::{FeatureProvider, GeoJsonFileProvider};
///
/// let provider = GeoJsonFileProvider::new();
/// let report = provider.load_features("data/flood_zones.geojson")?;
/// println!("loaded {} features", report.feature_set.len());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonFileProvider;

impl GeoJsonFileProvider {
    /// Create a new GeoJSON file provider.
    pub fn new() -> Self {
        Self
    }
}

impl FeatureProvider for GeoJsonFileProvider {
    fn load_features(&self, source_id: &str) -> Result<IngestReport, ProviderError> {
        let raw = fs::read(source_id).map_err(|err| ProviderError::Io {
            source_id: source_id.to_string(),
            detail: err.to_string(),
        })?;

        ingest_geojson(&raw, source_id).map_err(|err| ProviderError::Parse {
            source_id: source_id.to_string(),
            detail: err.to_string(),
        })
    }

    fn name(&self) -> &str {
        "geojson-file"
    }
}
