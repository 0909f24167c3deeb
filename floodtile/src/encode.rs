//! Tile image encoding.
//!
//! Rendered tiles leave the rasterizer as raw RGBA buffers. This module
//! defines the `TileEncoder` trait that turns those buffers into bytes on
//! the wire, plus the PNG implementation used in production. The trait
//! seam lets the pipeline pre-encode its fallback tile once and lets tests
//! substitute a failing encoder.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};

/// Encodes an RGBA tile image into a wire format.
///
/// Implementations must be `Send + Sync` so a single encoder can be shared
/// across request handler threads.
pub trait TileEncoder: Send + Sync {
    /// Encode the image into the target format.
    fn encode(&self, tile: &RgbaImage) -> Result<Vec<u8>, EncodeError>;

    /// File extension for the format (without dot), e.g. "png".
    fn extension(&self) -> &'static str;

    /// MIME type for HTTP responses, e.g. "image/png".
    fn content_type(&self) -> &'static str;

    /// Human-readable encoder name for logging.
    fn name(&self) -> &'static str;
}

/// Allow `Arc<dyn TileEncoder>` to be used wherever the trait is expected.
impl<T: TileEncoder + ?Sized> TileEncoder for Arc<T> {
    fn encode(&self, tile: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(tile)
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }

    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Errors that can occur during tile encoding.
#[derive(Debug)]
pub enum EncodeError {
    /// The underlying image library rejected the buffer.
    Image(image::ImageError),
    /// Encoder-specific failure with a description.
    Failed(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Image(err) => write!(f, "image encoding failed: {}", err),
            EncodeError::Failed(reason) => write!(f, "encoding failed: {}", reason),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Image(err) => Some(err),
            EncodeError::Failed(_) => None,
        }
    }
}

impl From<image::ImageError> for EncodeError {
    fn from(err: image::ImageError) -> Self {
        EncodeError::Image(err)
    }
}

/// PNG encoder backed by the `image` crate.
///
/// PNG is the production format: lossless, alpha-capable, and understood
/// by every slippy-map client.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl PngEncoder {
    /// Create a new PNG encoder.
    pub fn new() -> Self {
        Self
    }
}

impl TileEncoder for PngEncoder {
    fn encode(&self, tile: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
        let mut buffer = Cursor::new(Vec::new());
        tile.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn name(&self) -> &'static str {
        "png"
    }
}
