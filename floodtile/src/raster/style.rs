//! Severity-driven styling

use image::Rgba;

/// Opaque black used for ring outlines and circle borders.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fully transparent pixel value; also what interior rings punch into fills.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Radius in pixels of a rendered point marker.
pub const POINT_RADIUS: u32 = 3;

/// Stroke width in pixels of a rendered line.
pub const LINE_WIDTH: u32 = 2;

/// Fill colors keyed by feature severity.
///
/// The default table is the service's fixed styling; deployments may
/// override individual entries through configuration. Lookup is
/// case-insensitive and anything outside the four known levels resolves
/// to the `unknown` color.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityPalette {
    pub critical: Rgba<u8>,
    pub high: Rgba<u8>,
    pub medium: Rgba<u8>,
    pub low: Rgba<u8>,
    pub unknown: Rgba<u8>,
}

impl Default for SeverityPalette {
    fn default() -> Self {
        Self {
            critical: Rgba([128, 0, 128, 200]),
            high: Rgba([255, 0, 0, 180]),
            medium: Rgba([255, 165, 0, 150]),
            low: Rgba([255, 255, 0, 120]),
            unknown: Rgba([200, 200, 200, 100]),
        }
    }
}

impl SeverityPalette {
    /// Resolves the fill color for a severity value.
    pub fn color_for(&self, severity: &str) -> Rgba<u8> {
        match severity.to_ascii_lowercase().as_str() {
            "critical" => self.critical,
            "high" => self.high,
            "medium" => self.medium,
            "low" => self.low,
            _ => self.unknown,
        }
    }
}
