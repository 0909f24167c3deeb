//! Provider types and traits

use std::fmt;

use crate::geometry::IngestReport;

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Reading the source failed (missing file, permissions, IO error)
    Io { source_id: String, detail: String },
    /// Source contents could not be parsed as feature data
    Parse { source_id: String, detail: String },
    /// Source identifier does not match any known provider
    Unsupported(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Io { source_id, detail } => {
                write!(f, "Failed to read source '{}': {}", source_id, detail)
            }
            ProviderError::Parse { source_id, detail } => {
                write!(f, "Invalid feature data in '{}': {}", source_id, detail)
            }
            ProviderError::Unsupported(source_id) => {
                write!(f, "No provider for source '{}'", source_id)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Trait for flood hazard feature sources.
///
/// Implementors load a complete feature set from a source identified by an
/// opaque string (a filesystem path for the GeoJSON file provider). Loading
/// is infrequent: the dataset cache calls this once per source identifier
/// and serves every tile request from the cached result.
pub trait FeatureProvider: Send + Sync {
    /// Load all features from the given source.
    ///
    /// # Arguments
    ///
    /// * `source_id` - Opaque source identifier (meaning is provider-specific)
    ///
    /// # Returns
    ///
    /// The parsed feature set plus a count of records that were skipped
    /// during ingestion, or an error if the source could not be read or
    /// parsed at all.
    fn load_features(&self, source_id: &str) -> Result<IngestReport, ProviderError>;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;
}
