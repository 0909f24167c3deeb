//! High-level service facade.
//!
//! This module provides a simplified API that encapsulates all component
//! wiring and configuration, following the Facade pattern: construct a
//! [`TileService`] from a [`crate::config::Config`], then either call
//! [`TileService::serve`] or take its router for embedding elsewhere.
//!
//! # Example
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

mod error;
mod facade;

pub use error::ServiceError;
pub use facade::TileService;
