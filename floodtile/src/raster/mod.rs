//! Feature rasterization
//!
//! Paints filtered, reprojected features into a transparent RGBA buffer.
//! Features draw in encounter order and pixel writes replace what was
//! there, so the last feature to touch a pixel owns it.

mod draw;
mod style;

pub use style::{SeverityPalette, LINE_WIDTH, OUTLINE_COLOR, POINT_RADIUS, TRANSPARENT};

use image::{Rgba, RgbaImage};

use crate::coord::{BoundingBox, Crs};
use crate::geometry::{Coord, Geometry, Polygon};
use crate::project::ProjectedFeature;

/// Draws feature sets into fixed-size tile buffers.
///
/// Stateless apart from its configuration; one instance serves every
/// request concurrently.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    tile_size: u32,
    palette: SeverityPalette,
}

impl Rasterizer {
    pub fn new(tile_size: u32, palette: SeverityPalette) -> Self {
        Self { tile_size, palette }
    }

    /// Edge length in pixels of the square tiles this rasterizer produces.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// A fully transparent tile buffer.
    pub fn blank_tile(&self) -> RgbaImage {
        RgbaImage::new(self.tile_size, self.tile_size)
    }

    /// Renders features into a fresh buffer for the given Mercator tile box.
    ///
    /// An empty slice yields an untouched, fully transparent buffer.
    pub fn render(&self, features: &[ProjectedFeature<'_>], tile_bbox: &BoundingBox) -> RgbaImage {
        debug_assert_eq!(tile_bbox.crs, Crs::Mercator);

        let mut img = self.blank_tile();
        let size = f64::from(self.tile_size);
        let width = tile_bbox.width();
        let height = tile_bbox.height();

        for feature in features {
            let color = self.palette.color_for(&feature.source.severity());
            // Meters to pixels; row 0 is the tile's north edge
            let pixel_geom = feature.geometry.map_coords(|c| {
                Coord::new(
                    (c.x - tile_bbox.min_x) / width * size,
                    (tile_bbox.max_y - c.y) / height * size,
                )
            });
            paint_geometry(&mut img, &pixel_geom, color);
        }
        img
    }
}

fn paint_geometry(img: &mut RgbaImage, geometry: &Geometry, color: Rgba<u8>) {
    match geometry {
        Geometry::Point(c) => draw::fill_circle(img, *c, POINT_RADIUS, color, OUTLINE_COLOR),
        Geometry::MultiPoint(points) => {
            for c in points {
                draw::fill_circle(img, *c, POINT_RADIUS, color, OUTLINE_COLOR);
            }
        }
        Geometry::LineString(line) => draw::stroke_polyline(img, line, LINE_WIDTH, color),
        Geometry::MultiLineString(lines) => {
            for line in lines {
                draw::stroke_polyline(img, line, LINE_WIDTH, color);
            }
        }
        Geometry::Polygon(polygon) => paint_polygon(img, polygon, color),
        Geometry::MultiPolygon(polygons) => {
            for polygon in polygons {
                paint_polygon(img, polygon, color);
            }
        }
    }
}

/// Fill plus outline for one polygon, holes punched fully transparent.
///
/// A degenerate exterior skips the whole polygon; a degenerate hole skips
/// just that hole.
fn paint_polygon(img: &mut RgbaImage, polygon: &Polygon, color: Rgba<u8>) {
    if polygon.exterior.len() < 3 {
        return;
    }

    draw::fill_ring(img, &polygon.exterior, color);
    draw::stroke_ring(img, &polygon.exterior, OUTLINE_COLOR);

    for hole in &polygon.interiors {
        if hole.len() < 3 {
            continue;
        }
        draw::fill_ring(img, hole, TRANSPARENT);
        draw::stroke_ring(img, hole, OUTLINE_COLOR);
    }
}
