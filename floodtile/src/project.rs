//! Geographic to Web Mercator reprojection
//!
//! Applies the forward Web Mercator formulas coordinate-wise, preserving
//! ring structure and hole membership. Projection always produces new
//! geometry; the cached geographic source is shared across requests and
//! is never mutated.

use std::f64::consts::PI;

use crate::coord::{MAX_LAT, MERCATOR_EXTENT, MIN_LAT};
use crate::geometry::{Coord, Feature, FeatureSet, Geometry};

/// A source feature paired with its projected geometry for one request.
#[derive(Debug)]
pub struct ProjectedFeature<'a> {
    pub source: &'a Feature,
    pub geometry: Geometry,
}

/// Projects one geographic coordinate (degrees) to Mercator meters.
///
/// Latitude is clamped to the projection's valid range first, so data
/// reaching toward the poles maps to the top/bottom of the square world
/// instead of an infinite ordinate.
#[inline]
pub fn project_coord(c: Coord) -> Coord {
    let lat = c.y.clamp(MIN_LAT, MAX_LAT);
    Coord::new(
        c.x * MERCATOR_EXTENT / 180.0,
        (PI / 4.0 + lat * PI / 360.0).tan().ln() * MERCATOR_EXTENT / PI,
    )
}

/// Projects every coordinate of a geometry, preserving its structure.
pub fn project_geometry(geometry: &Geometry) -> Geometry {
    geometry.map_coords(project_coord)
}

/// Projects a whole feature set for one render, pairing each source
/// feature with its Mercator geometry.
pub fn project_feature_set(set: &FeatureSet) -> Vec<ProjectedFeature<'_>> {
    set.features()
        .iter()
        .map(|feature| ProjectedFeature {
            source: feature,
            geometry: project_geometry(feature.geometry()),
        })
        .collect()
}
