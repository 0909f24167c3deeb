//! Tile coordinate conversion module
//!
//! Converts slippy-map tile addresses into bounding boxes in Web Mercator
//! meters and in geographic degrees. Both conversions derive from the
//! standard quad-tree tiling of the Web Mercator plane.

mod types;

pub use types::{
    BoundingBox, CoordError, Crs, TileAddress, MAX_LAT, MAX_ZOOM, MERCATOR_EXTENT, MIN_LAT,
};

use std::f64::consts::PI;

/// Computes the tile's bounding box in Web Mercator meters.
///
/// Tile rows count downward from the north edge while Mercator Y grows
/// upward, so the Y bounds are flipped relative to the row index.
#[inline]
pub fn mercator_bbox(addr: &TileAddress) -> BoundingBox {
    let n = f64::from(addr.tiles_per_axis());
    let extent = 2.0 * MERCATOR_EXTENT;
    let x = f64::from(addr.x());
    let y = f64::from(addr.y());

    BoundingBox {
        min_x: x / n * extent - MERCATOR_EXTENT,
        max_x: (x + 1.0) / n * extent - MERCATOR_EXTENT,
        min_y: MERCATOR_EXTENT - (y + 1.0) / n * extent,
        max_y: MERCATOR_EXTENT - y / n * extent,
        crs: Crs::Mercator,
    }
}

/// Computes the tile's bounding box in geographic degrees.
///
/// Longitude is linear in the column index; latitude comes from the
/// inverse Gudermannian evaluated at the row edges (row `y+1` is the
/// southern edge because smaller rows sit further north).
#[inline]
pub fn geographic_bbox(addr: &TileAddress) -> BoundingBox {
    let n = f64::from(addr.tiles_per_axis());
    let x = f64::from(addr.x());
    let y = f64::from(addr.y());

    BoundingBox {
        min_x: x / n * 360.0 - 180.0,
        max_x: (x + 1.0) / n * 360.0 - 180.0,
        min_y: row_edge_latitude(y + 1.0, n),
        max_y: row_edge_latitude(y, n),
        crs: Crs::Geographic,
    }
}

/// Latitude in degrees of the horizontal tile edge at row position `k`.
#[inline]
fn row_edge_latitude(k: f64, n: f64) -> f64 {
    (PI * (1.0 - 2.0 * k / n)).sinh().atan().to_degrees()
}

/// Converts a Web Mercator X coordinate back to longitude degrees.
#[inline]
pub fn mercator_to_lon(x: f64) -> f64 {
    x / MERCATOR_EXTENT * 180.0
}

/// Converts a Web Mercator Y coordinate back to latitude degrees.
#[inline]
pub fn mercator_to_lat(y: f64) -> f64 {
    (y * PI / MERCATOR_EXTENT).sinh().atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_tile_spans_full_mercator_extent() {
        let addr = TileAddress::new(0, 0, 0).unwrap();
        let bbox = mercator_bbox(&addr);

        assert_eq!(bbox.min_x, -MERCATOR_EXTENT);
        assert_eq!(bbox.max_x, MERCATOR_EXTENT);
        assert_eq!(bbox.min_y, -MERCATOR_EXTENT);
        assert_eq!(bbox.max_y, MERCATOR_EXTENT);
        assert_eq!(bbox.crs, Crs::Mercator);
    }

    #[test]
    fn test_world_tile_geographic_bounds() {
        let addr = TileAddress::new(0, 0, 0).unwrap();
        let bbox = geographic_bbox(&addr);

        assert_eq!(bbox.min_x, -180.0);
        assert_eq!(bbox.max_x, 180.0);
        // Latitude limits of the square Web Mercator world
        assert!((bbox.max_y - 85.05112878).abs() < 1e-6);
        assert!((bbox.min_y + 85.05112878).abs() < 1e-6);
    }

    #[test]
    fn test_bbox_ordering_holds_across_zooms() {
        // Corners, center and an off-center tile at each sampled zoom
        for zoom in [0u8, 1, 3, 5, 10, 15, 20] {
            let max_index = (1u64 << zoom) as u32 - 1;
            let samples = [
                (0, 0),
                (max_index, max_index),
                (max_index / 2, max_index / 2),
                (max_index, 0),
                (0, max_index),
            ];
            for (x, y) in samples {
                let addr = TileAddress::new(zoom, x, y).unwrap();

                let merc = mercator_bbox(&addr);
                assert!(merc.min_x < merc.max_x, "mercator x ordering at {}", addr);
                assert!(merc.min_y < merc.max_y, "mercator y ordering at {}", addr);

                let geo = geographic_bbox(&addr);
                assert!(geo.min_x < geo.max_x, "geographic x ordering at {}", addr);
                assert!(geo.min_y < geo.max_y, "geographic y ordering at {}", addr);
            }
        }
    }

    #[test]
    fn test_adjacent_tiles_share_exact_edges() {
        let left = TileAddress::new(8, 100, 37).unwrap();
        let right = TileAddress::new(8, 101, 37).unwrap();
        let below = TileAddress::new(8, 100, 38).unwrap();

        assert_eq!(mercator_bbox(&left).max_x, mercator_bbox(&right).min_x);
        assert_eq!(mercator_bbox(&left).min_y, mercator_bbox(&below).max_y);
        assert_eq!(geographic_bbox(&left).max_x, geographic_bbox(&right).min_x);
    }

    #[test]
    fn test_mercator_corners_invert_to_geographic_corners() {
        // Inverse-projecting the Mercator bbox must reproduce the
        // geographic bbox within a micro-degree.
        for (zoom, x, y) in [(2u8, 1u32, 1u32), (7, 41, 87), (12, 1205, 1539)] {
            let addr = TileAddress::new(zoom, x, y).unwrap();
            let merc = mercator_bbox(&addr);
            let geo = geographic_bbox(&addr);

            assert!((mercator_to_lon(merc.min_x) - geo.min_x).abs() < 1e-6);
            assert!((mercator_to_lon(merc.max_x) - geo.max_x).abs() < 1e-6);
            assert!((mercator_to_lat(merc.min_y) - geo.min_y).abs() < 1e-6);
            assert!((mercator_to_lat(merc.max_y) - geo.max_y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_row_zero_is_north_edge() {
        let north = TileAddress::new(3, 4, 0).unwrap();
        let south = TileAddress::new(3, 4, 7).unwrap();

        assert!(geographic_bbox(&north).max_y > geographic_bbox(&south).max_y);
        assert!(mercator_bbox(&north).max_y > mercator_bbox(&south).max_y);
    }

    #[test]
    fn test_zoom_above_bound_rejected() {
        let result = TileAddress::new(21, 0, 0);
        assert!(matches!(result, Err(CoordError::InvalidZoom { zoom: 21, .. })));
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        // Max index at zoom 5 is 31
        let result = TileAddress::new(5, 32, 0);
        assert!(matches!(result, Err(CoordError::InvalidColumn { x: 32, zoom: 5 })));
    }

    #[test]
    fn test_out_of_range_row_rejected() {
        let result = TileAddress::new(5, 0, 32);
        assert!(matches!(result, Err(CoordError::InvalidRow { y: 32, zoom: 5 })));
    }

    #[test]
    fn test_configured_max_zoom_override() {
        assert!(TileAddress::with_max_zoom(15, 0, 0, 12).is_err());
        assert!(TileAddress::with_max_zoom(12, 100, 100, 12).is_ok());
        // Default bound admits zoom 20
        assert!(TileAddress::new(20, 0, 0).is_ok());
    }

    #[test]
    fn test_error_messages_name_the_bound() {
        let err = TileAddress::new(5, 32, 0).unwrap_err();
        assert!(err.to_string().contains("32"));
        assert!(err.to_string().contains("zoom 5"));
    }
}
