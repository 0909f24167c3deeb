//! Provider factory for centralized provider creation.
//!
//! This module provides a factory pattern for creating feature providers,
//! keeping source-identifier sniffing out of server startup code. New
//! source kinds can be added as new enum variants without touching the
//! service wiring.

use std::sync::Arc;

use crate::provider::geojson_file::GeoJsonFileProvider;
use crate::provider::types::{FeatureProvider, ProviderError};

/// Configuration for creating a provider.
///
/// Encapsulates the settings needed to create a specific provider type.
///
/// # Example
///
/// ```
/// use floodtile::provider::ProviderConfig;
///
/// let config = ProviderConfig::from_source("data/flood_zones.geojson").unwrap();
/// assert_eq!(config.name(), "geojson-file");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderConfig {
    /// GeoJSON file on the local filesystem.
    ///
    /// Selected for sources ending in `.geojson` or `.json`.
    GeoJsonFile,
}

impl ProviderConfig {
    /// Derive a provider configuration from a source identifier.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unsupported` when the identifier matches no
    /// known provider, so a misconfigured source fails at startup instead
    /// of on the first tile request.
    pub fn from_source(source_id: &str) -> Result<Self, ProviderError> {
        let lowered = source_id.to_ascii_lowercase();
        if lowered.ends_with(".geojson") || lowered.ends_with(".json") {
            Ok(Self::GeoJsonFile)
        } else {
            Err(ProviderError::Unsupported(source_id.to_string()))
        }
    }

    /// Returns the provider name for this configuration.
    pub fn name(&self) -> &str {
        match self {
            Self::GeoJsonFile => "geojson-file",
        }
    }
}

/// Factory for creating provider instances.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from the given configuration.
    pub fn create(config: &ProviderConfig) -> Arc<dyn FeatureProvider> {
        match config {
            ProviderConfig::GeoJsonFile => Arc::new(GeoJsonFileProvider::new()),
        }
    }
}
