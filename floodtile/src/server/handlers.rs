//! HTTP request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::coord::TileAddress;
use crate::tile::{RenderOutcome, RenderStage};
use crate::{log_debug, log_error};

use super::state::{AppState, TILE_CACHE_CONTROL};

/// Body of the health endpoint response.
#[derive(Debug, Serialize)]
pub(crate) struct HealthPayload {
    status: &'static str,
    data_loaded: bool,
    feature_count: usize,
}

/// `GET /{z}/{x}/{y}` - render one map tile.
///
/// Invalid addresses are rejected with `400 Bad Request` before any
/// rendering starts. Every valid address resolves to `200 OK`: rendering
/// runs on the blocking pool, and if the task itself fails the empty
/// fallback tile is served in its place.
pub(crate) async fn serve_tile(
    State(state): State<Arc<AppState>>,
    Path((z, x, y)): Path<(u8, u32, u32)>,
) -> Response {
    let addr = match TileAddress::with_max_zoom(z, x, y, state.max_zoom) {
        Ok(addr) => addr,
        Err(err) => {
            log_debug!(state.logger, "Rejected tile request {}/{}/{}: {}", z, x, y, err);
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let renderer = Arc::clone(&state.renderer);
    let outcome = match tokio::task::spawn_blocking(move || renderer.render_tile(&addr)).await {
        Ok(outcome) => outcome,
        Err(err) => {
            log_error!(
                state.logger,
                "Tile {} render task failed ({}); serving empty tile",
                addr,
                err
            );
            RenderOutcome::degraded(state.fallback_tile.as_ref().clone(), RenderStage::Rendering)
        }
    };

    (
        StatusCode::OK,
        [
            ("content-type", state.content_type),
            ("cache-control", TILE_CACHE_CONTROL),
        ],
        outcome.into_bytes(),
    )
        .into_response()
}

/// `GET /health` - liveness plus dataset readiness.
///
/// Reports whether a dataset is loaded and how many features it holds.
/// Never triggers a dataset load.
pub(crate) async fn health(State(state): State<Arc<AppState>>) -> Response {
    let current = state.cache.current();
    let payload = HealthPayload {
        status: "healthy",
        data_loaded: current.is_some(),
        feature_count: current.map(|set| set.len()).unwrap_or(0),
    };
    Json(payload).into_response()
}
