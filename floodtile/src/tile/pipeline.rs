//! Production tile rendering pipeline.
//!
//! Chains the dataset cache, projector, spatial filter, rasterizer and
//! encoder into a single [`TileRenderer`] implementation. Every failure
//! past address validation degrades to a pre-encoded empty tile instead
//! of an error response.

use std::sync::Arc;
use std::time::Instant;

use crate::coord::{self, TileAddress};
use crate::dataset::DatasetCache;
use crate::encode::{EncodeError, TileEncoder};
use crate::filter::filter_by_bbox;
use crate::log::Logger;
use crate::project::project_feature_set;
use crate::raster::Rasterizer;
use crate::tile::renderer::{RenderOutcome, RenderStage, TileRenderer};
use crate::tile::stats::{RenderStats, RenderStatsSnapshot};
use crate::{log_debug, log_trace, log_warn};

use std::fmt;

/// Errors that can occur while constructing a pipeline.
#[derive(Debug)]
pub enum PipelineError {
    /// The fallback tile could not be pre-encoded.
    FallbackEncoding(EncodeError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::FallbackEncoding(err) => {
                write!(f, "Failed to encode fallback tile: {}", err)
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::FallbackEncoding(err) => Some(err),
        }
    }
}

/// Default tile pipeline: cache, project, filter, rasterize, encode.
///
/// The fallback tile (a fully transparent tile at the configured size) is
/// encoded once at construction. Requests that cannot produce real output
/// serve a clone of those bytes, so the degraded path allocates nothing
/// but the response body and can never itself fail.
///
/// # Example
///
/// ```ignore
/// use floodtile::dataset::DatasetCache;
/// use floodtile::encode::PngEncoder;
/// use floodtile::log::NoOpLogger;
/// use floodtile::provider::GeoJsonFileProvider;
/// use floodtile::raster::{Rasterizer, SeverityPalette};
/// use floodtile::tile::{TilePipeline, TileRenderer};
/// use floodtile::coord::TileAddress;
/// use std::sync::Arc;
///
/// let cache = Arc::new(DatasetCache::new(
///     Arc::new(GeoJsonFileProvider::new()),
///     Arc::new(NoOpLogger),
/// ));
/// let pipeline = TilePipeline::new(
///     "data/flood_zones.geojson",
///     cache,
///     Rasterizer::new(256, SeverityPalette::default()),
///     Arc::new(PngEncoder::new()),
///     Arc::new(NoOpLogger),
/// )?;
///
/// let addr = TileAddress::new(10, 301, 384)?;
/// let outcome = pipeline.render_tile(&addr);
/// ```
pub struct TilePipeline {
    /// Source identifier resolved through the dataset cache
    source_id: String,
    /// Dataset cache shared with the health endpoint
    cache: Arc<DatasetCache>,
    /// Rasterizer owning tile size and severity palette
    rasterizer: Rasterizer,
    /// Wire format encoder
    encoder: Arc<dyn TileEncoder>,
    /// Logger for diagnostic output
    logger: Arc<dyn Logger>,
    /// Pre-encoded fully transparent tile
    fallback: Vec<u8>,
    /// Render outcome counters
    stats: RenderStats,
}

impl TilePipeline {
    /// Create a new pipeline and pre-encode its fallback tile.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::FallbackEncoding`] when the encoder cannot
    /// encode the blank tile. A pipeline that cannot produce its fallback
    /// could not honor the always-a-tile contract, so this is fatal at
    /// startup.
    pub fn new(
        source_id: impl Into<String>,
        cache: Arc<DatasetCache>,
        rasterizer: Rasterizer,
        encoder: Arc<dyn TileEncoder>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, PipelineError> {
        let fallback = encoder
            .encode(&rasterizer.blank_tile())
            .map_err(PipelineError::FallbackEncoding)?;

        Ok(Self {
            source_id: source_id.into(),
            cache,
            rasterizer,
            encoder,
            logger,
            fallback,
            stats: RenderStats::new(),
        })
    }

    /// A copy of the pre-encoded empty tile.
    pub fn fallback_tile(&self) -> Vec<u8> {
        self.fallback.clone()
    }

    /// MIME type of the tiles this pipeline produces.
    pub fn content_type(&self) -> &'static str {
        self.encoder.content_type()
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.rasterizer.tile_size()
    }

    /// Snapshot of render outcome counters.
    pub fn stats(&self) -> RenderStatsSnapshot {
        self.stats.snapshot()
    }
}

impl TileRenderer for TilePipeline {
    fn render_tile(&self, addr: &TileAddress) -> RenderOutcome {
        let started = Instant::now();

        let Some(dataset) = self.cache.feature_set(&self.source_id) else {
            self.stats.record_no_data();
            log_debug!(
                self.logger,
                "Tile {}: no dataset available, serving empty tile",
                addr
            );
            return RenderOutcome::no_data(self.fallback.clone());
        };

        let tile_bbox = coord::mercator_bbox(addr);
        log_trace!(
            self.logger,
            "Tile {} covers {} / {}",
            addr,
            tile_bbox,
            coord::geographic_bbox(addr)
        );

        let projected = project_feature_set(&dataset);
        let visible = filter_by_bbox(projected, &tile_bbox);
        let drawn = visible.len();

        let image = self.rasterizer.render(&visible, &tile_bbox);

        match self.encoder.encode(&image) {
            Ok(bytes) => {
                self.stats.record_rendered();
                log_debug!(
                    self.logger,
                    "Tile {}: rendered {} of {} feature(s) in {:?}",
                    addr,
                    drawn,
                    dataset.len(),
                    started.elapsed()
                );
                RenderOutcome::rendered(bytes, drawn)
            }
            Err(err) => {
                self.stats.record_degraded();
                log_warn!(
                    self.logger,
                    "Tile {}: {} encoding failed ({}); serving empty tile",
                    addr,
                    self.encoder.name(),
                    err
                );
                RenderOutcome::degraded(self.fallback.clone(), RenderStage::Encoding)
            }
        }
    }
}
