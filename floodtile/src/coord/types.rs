//! Tile address and bounding-box type definitions

use std::fmt;

/// Half the Web Mercator plane extent in meters (equatorial circumference / 2).
pub const MERCATOR_EXTENT: f64 = 20_037_508.342_789_244;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Default upper zoom bound for tile addresses (0-20).
pub const MAX_ZOOM: u8 = 20;

/// Coordinate reference system tag for a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crs {
    /// Longitude/latitude degrees (EPSG:4326)
    Geographic,
    /// Web Mercator meters (EPSG:3857)
    Mercator,
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crs::Geographic => write!(f, "EPSG:4326"),
            Crs::Mercator => write!(f, "EPSG:3857"),
        }
    }
}

/// A validated slippy-map tile address.
///
/// Construction enforces `x, y < 2^zoom` and the zoom bound, so any
/// `TileAddress` value held downstream is renderable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileAddress {
    zoom: u8,
    x: u32,
    y: u32,
}

impl TileAddress {
    /// Creates a tile address validated against the default zoom bound.
    ///
    /// # Errors
    ///
    /// Returns a `CoordError` when the zoom exceeds [`MAX_ZOOM`] or when
    /// x/y fall outside `[0, 2^zoom)`.
    pub fn new(zoom: u8, x: u32, y: u32) -> Result<Self, CoordError> {
        Self::with_max_zoom(zoom, x, y, MAX_ZOOM)
    }

    /// Creates a tile address validated against a configured zoom bound.
    pub fn with_max_zoom(zoom: u8, x: u32, y: u32, max_zoom: u8) -> Result<Self, CoordError> {
        if zoom > max_zoom {
            return Err(CoordError::InvalidZoom { zoom, max: max_zoom });
        }
        let n = 1u64 << zoom;
        if u64::from(x) >= n {
            return Err(CoordError::InvalidColumn { x, zoom });
        }
        if u64::from(y) >= n {
            return Err(CoordError::InvalidRow { y, zoom });
        }
        Ok(Self { zoom, x, y })
    }

    /// Zoom level (0 is the single world tile).
    #[inline]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Column index, 0 at the antimeridian moving east.
    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Row index, 0 at the north edge moving south.
    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Number of tiles per axis at this address's zoom level.
    #[inline]
    pub fn tiles_per_axis(&self) -> u32 {
        1u32 << self.zoom
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// An axis-aligned bounding box tagged with its coordinate reference.
///
/// Invariant: `min_x < max_x` and `min_y < max_y` for every box produced
/// by the tile conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub crs: Crs,
}

impl BoundingBox {
    /// Horizontal span in the box's units.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical span in the box's units.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}, {:.6}, {:.6}] ({})",
            self.min_x, self.min_y, self.max_x, self.max_y, self.crs
        )
    }
}

/// Errors produced when a tile address fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Zoom level is outside the configured range
    InvalidZoom { zoom: u8, max: u8 },
    /// Column index is outside [0, 2^zoom)
    InvalidColumn { x: u32, zoom: u8 },
    /// Row index is outside [0, 2^zoom)
    InvalidRow { y: u32, zoom: u8 },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidZoom { zoom, max } => {
                write!(f, "Invalid zoom level: {} (must be between 0 and {})", zoom, max)
            }
            CoordError::InvalidColumn { x, zoom } => {
                write!(
                    f,
                    "Invalid tile column: {} (must be below {} at zoom {})",
                    x,
                    1u64 << zoom,
                    zoom
                )
            }
            CoordError::InvalidRow { y, zoom } => {
                write!(
                    f,
                    "Invalid tile row: {} (must be below {} at zoom {})",
                    y,
                    1u64 << zoom,
                    zoom
                )
            }
        }
    }
}

impl std::error::Error for CoordError {}
