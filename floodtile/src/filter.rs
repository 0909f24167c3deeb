//! Spatial filtering of reprojected features
//!
//! Envelope-versus-tile culling. The test is axis-aligned bounding-box
//! overlap only: a feature whose envelope merely touches the tile box may
//! pass without drawing a visible pixel, which is fine. What is not fine
//! is a false negative, so the overlap test is closed on the boundary.

use crate::coord::{BoundingBox, Crs};
use crate::geometry::Envelope;
use crate::project::ProjectedFeature;

/// Retains the features whose geometry envelope intersects the tile's
/// Mercator bounding box, preserving encounter order.
pub fn filter_by_bbox<'a>(
    features: Vec<ProjectedFeature<'a>>,
    tile_bbox: &BoundingBox,
) -> Vec<ProjectedFeature<'a>> {
    debug_assert_eq!(tile_bbox.crs, Crs::Mercator);
    let tile_env = bbox_envelope(tile_bbox);

    features
        .into_iter()
        .filter(|feature| {
            feature
                .geometry
                .envelope()
                .is_some_and(|env| env.intersects(&tile_env))
        })
        .collect()
}

#[inline]
fn bbox_envelope(bbox: &BoundingBox) -> Envelope {
    Envelope {
        min_x: bbox.min_x,
        min_y: bbox.min_y,
        max_x: bbox.max_x,
        max_y: bbox.max_y,
    }
}
