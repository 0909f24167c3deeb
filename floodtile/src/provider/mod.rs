//! Feature data providers.
//!
//! A provider turns an opaque source identifier into a parsed
//! [`FeatureSet`](crate::geometry::FeatureSet). Production deployments use
//! [`GeoJsonFileProvider`] to read a GeoJSON file from disk; tests swap in
//! a mock through the [`FeatureProvider`] trait.
//!
//! Providers are deliberately dumb: no caching, no retry, no awareness of
//! tiles. The dataset cache above them decides when to (re)load.

mod factory;
mod geojson_file;
#[cfg(test)]
mod mock;
mod types;

pub use factory::{ProviderConfig, ProviderFactory};
pub use geojson_file::GeoJsonFileProvider;
#[cfg(test)]
pub use mock::MockFeatureProvider;
pub use types::{FeatureProvider, ProviderError};
