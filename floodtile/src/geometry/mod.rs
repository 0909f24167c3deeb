//! In-memory feature model and source ingestion
//!
//! The geometry model is a closed set of kinds the rasterizer can draw;
//! dispatch happens by matching the variant, so a new kind cannot be added
//! without the compiler pointing at every site that must handle it.

mod parse;
mod types;

pub use parse::{ingest_geojson, IngestReport, ParseError};
pub use types::{
    AttrValue, Coord, Envelope, Feature, FeatureSet, Geometry, Polygon, DEFAULT_SEVERITY,
    SEVERITY_ATTR, SEVERITY_FALLBACK_ATTR,
};
