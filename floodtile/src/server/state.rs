//! Shared state for the HTTP handlers.

use std::sync::Arc;

use crate::dataset::DatasetCache;
use crate::log::Logger;
use crate::tile::TileRenderer;

/// Cache-Control header value applied to tile responses.
///
/// Tiles are deterministic for a given dataset, so intermediaries may
/// cache them for an hour.
pub(crate) const TILE_CACHE_CONTROL: &str = "public, max-age=3600";

/// State shared across all HTTP handlers.
pub struct AppState {
    pub(crate) renderer: Arc<dyn TileRenderer>,
    pub(crate) cache: Arc<DatasetCache>,
    pub(crate) fallback_tile: Arc<Vec<u8>>,
    pub(crate) content_type: &'static str,
    pub(crate) max_zoom: u8,
    pub(crate) logger: Arc<dyn Logger>,
}

impl AppState {
    /// Assemble handler state around a renderer and its dataset cache.
    ///
    /// `fallback_tile` must be a fully encoded empty tile in the renderer's
    /// output format; it is served verbatim when a request cannot be
    /// rendered at all.
    pub fn new(
        renderer: Arc<dyn TileRenderer>,
        cache: Arc<DatasetCache>,
        fallback_tile: Vec<u8>,
        content_type: &'static str,
        max_zoom: u8,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            renderer,
            cache,
            fallback_tile: Arc::new(fallback_tile),
            content_type,
            max_zoom,
            logger,
        }
    }
}
