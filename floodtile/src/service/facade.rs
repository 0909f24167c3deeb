//! Flood tile service facade implementation.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::error::ServiceError;
use crate::config::Config;
use crate::dataset::DatasetCache;
use crate::encode::{PngEncoder, TileEncoder};
use crate::log::Logger;
use crate::provider::{ProviderConfig, ProviderFactory};
use crate::raster::Rasterizer;
use crate::server::{build_router, AppState};
use crate::tile::{TilePipeline, TileRenderer};
use crate::{log_error, log_info, log_warn};

/// High-level facade for the flood tile service.
///
/// Encapsulates all component creation and wiring: feature provider,
/// dataset cache, rasterizer, encoder, render pipeline, and HTTP router.
///
/// # Example
///
/// ```ignore
/// use floodtile::config::Config;
/// use floodtile::log::NoOpLogger;
/// use floodtile::service::TileService;
/// use std::sync::Arc;
///
/// let config = Config::load()?;
/// let service = TileService::new(config, Arc::new(NoOpLogger))?;
/// service.serve().await?;
/// ```
pub struct TileService {
    /// Service configuration
    config: Config,
    /// Dataset cache shared by the pipeline and the health endpoint
    cache: Arc<DatasetCache>,
    /// Render pipeline (kept for stats reporting)
    pipeline: Arc<TilePipeline>,
    /// Shared HTTP handler state
    state: Arc<AppState>,
    /// Logger for diagnostic output
    logger: Arc<dyn Logger>,
}

impl TileService {
    /// Create a new tile service from configuration.
    ///
    /// Wires together the feature provider, dataset cache, rasterizer,
    /// PNG encoder, and render pipeline. No dataset is loaded yet; call
    /// [`Self::serve`] (or [`Self::load_initial_dataset`]) for that.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured source has no matching provider
    /// or the pipeline cannot pre-encode its fallback tile.
    pub fn new(config: Config, logger: Arc<dyn Logger>) -> Result<Self, ServiceError> {
        let provider_config = ProviderConfig::from_source(&config.data.source)?;
        let provider = ProviderFactory::create(&provider_config);
        let cache = Arc::new(DatasetCache::new(provider, logger.clone()));

        let rasterizer = Rasterizer::new(config.tile.size, config.style.palette.clone());
        let encoder: Arc<dyn TileEncoder> = Arc::new(PngEncoder);
        let pipeline = Arc::new(TilePipeline::new(
            config.data.source.clone(),
            Arc::clone(&cache),
            rasterizer,
            encoder,
            logger.clone(),
        )?);

        let state = Arc::new(AppState::new(
            Arc::clone(&pipeline) as Arc<dyn TileRenderer>,
            Arc::clone(&cache),
            pipeline.fallback_tile(),
            pipeline.content_type(),
            config.tile.max_zoom,
            logger.clone(),
        ));

        log_info!(
            logger,
            "Service wired: source '{}' via {}, {}px tiles, zoom 0-{}",
            config.data.source,
            cache.provider_name(),
            config.tile.size,
            config.tile.max_zoom
        );

        Ok(Self {
            config,
            cache,
            pipeline,
            state,
            logger,
        })
    }

    /// Get the service configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the dataset cache.
    pub fn cache(&self) -> &Arc<DatasetCache> {
        &self.cache
    }

    /// Build the HTTP router backed by this service's state.
    ///
    /// Useful for embedding the tile routes in a larger application; the
    /// normal entry point is [`Self::serve`].
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    /// Eagerly load the dataset so the first tile request is served warm.
    ///
    /// A failed load is not fatal: the service starts anyway and serves
    /// empty tiles until the source becomes readable.
    pub fn load_initial_dataset(&self) {
        match self.cache.feature_set(&self.config.data.source) {
            Some(set) => log_info!(
                self.logger,
                "Initial dataset ready: {} feature(s) from '{}'",
                set.len(),
                set.source_id()
            ),
            None => log_warn!(
                self.logger,
                "Initial dataset load failed; serving empty tiles until '{}' becomes readable",
                self.config.data.source
            ),
        }
    }

    /// Bind the configured address and serve tiles until shutdown.
    ///
    /// Performs the initial dataset load before binding the socket, then
    /// blocks until the process receives Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound or the server loop
    /// fails.
    pub async fn serve(&self) -> Result<(), ServiceError> {
        self.register_panic_state();
        self.load_initial_dataset();

        let addr = format!("{}:{}", self.config.server.bind, self.config.server.port);
        let listener = TcpListener::bind(&addr).await?;
        log_info!(self.logger, "Serving flood tiles on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal(self.logger.clone()))
            .await?;

        log_info!(self.logger, "Server stopped");
        Ok(())
    }

    /// Expose cache and render counters to the panic handler, so a crash
    /// report shows what the service was doing.
    fn register_panic_state(&self) {
        let cache = Arc::clone(&self.cache);
        let pipeline = Arc::clone(&self.pipeline);
        crate::panic::set_state_callback(move || {
            format!(
                "dataset cache: {}\ntile renders: {}",
                cache.stats(),
                pipeline.stats()
            )
        });
    }
}

async fn shutdown_signal(logger: Arc<dyn Logger>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_info!(logger, "Shutdown signal received"),
        Err(err) => log_error!(logger, "Failed to listen for shutdown signal: {}", err),
    }
}
