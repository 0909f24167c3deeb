//! FloodTile - flood hazard map tiles over HTTP
//!
//! This library renders flood hazard zones as raster map tiles in the
//! standard XYZ addressing scheme, serving them from GeoJSON sources via
//! an embedded HTTP server.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use floodtile::config::Config;
//! use floodtile::log::TracingLogger;
//! use floodtile::service::TileService;
//! use std::sync::Arc;
//!
//! let config = Config::load()?;
//! let service = TileService::new(config, Arc::new(TracingLogger::new()))?;
//! service.serve().await?;
//! ```

pub mod config;
pub mod coord;
pub mod dataset;
pub mod encode;
pub mod filter;
pub mod geometry;
pub mod log;
pub mod logging;
pub mod panic;
pub mod project;
pub mod provider;
pub mod raster;
pub mod server;
pub mod service;
pub mod tile;

/// Version of the FloodTile library and server.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
