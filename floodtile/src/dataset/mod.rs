//! Dataset caching.
//!
//! Flood hazard data changes rarely; tile requests arrive constantly. The
//! [`DatasetCache`] sits between the two, holding the one active
//! [`FeatureSet`](crate::geometry::FeatureSet) in memory behind an atomic
//! swap so the render path never waits on disk unless the dataset actually
//! changed.

mod cache;
mod stats;

pub use cache::DatasetCache;
pub use stats::{DatasetStats, DatasetStatsSnapshot};
