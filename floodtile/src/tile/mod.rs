//! Tile rendering abstraction layer.
//!
//! This module provides the `TileRenderer` trait and the production
//! pipeline behind it, keeping the HTTP layer decoupled from how tiles
//! are actually produced.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP handlers                           │
//! │             (depend on Arc<dyn TileRenderer>)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   TileRenderer trait                        │
//! │          render_tile(&TileAddress) -> RenderOutcome         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │      TilePipeline       │   │     MockTileRenderer        │
//! │ (cache+raster+encoder)  │   │     (for testing)           │
//! └─────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! A rendered outcome always carries servable bytes. The pipeline absorbs
//! every post-validation failure by degrading to a pre-encoded transparent
//! tile, so one broken dataset or encoder bug cannot turn the map layer
//! into a wall of broken-image icons.

#[cfg(test)]
mod mock;
mod pipeline;
mod renderer;
mod stats;

#[cfg(test)]
pub use mock::MockTileRenderer;
pub use pipeline::{PipelineError, TilePipeline};
pub use renderer::{RenderOutcome, RenderStage, RenderStatus, TileRenderer};
pub use stats::{RenderStats, RenderStatsSnapshot};
