//! HTTP surface of the tile service.
//!
//! ```text
//! GET /{z}/{x}/{y}                GET /health
//!       |                              |
//!       v                              v
//!  [serve_tile]                    [health]
//!       | spawn_blocking               |
//!       v                              v
//!  TileRenderer::render_tile      DatasetCache::current
//!       |                              |
//!       v                              v
//!  200 OK (tile bytes)            200 OK (JSON readiness)
//! ```
//!
//! The HTTP layer is a thin passthrough: address validation happens at
//! [`crate::coord::TileAddress`] construction, rendering happens behind the
//! [`crate::tile::TileRenderer`] trait on the blocking pool, and every
//! valid tile request ends in `200 OK` with servable bytes.

mod handlers;
mod router;
mod state;

pub use router::build_router;
pub use state::AppState;
