//! Router assembly and panic containment.

use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

use crate::log_error;

use super::handlers::{health, serve_tile};
use super::state::{AppState, TILE_CACHE_CONTROL};

/// Build the service router.
///
/// Routes:
/// - `GET /{z}/{x}/{y}` renders one map tile
/// - `GET /health` reports dataset readiness
///
/// A panic anywhere in the handler stack is caught and answered with the
/// empty fallback tile rather than a 500, so map clients always receive
/// a drawable response.
pub fn build_router(state: Arc<AppState>) -> Router {
    let fallback = Arc::clone(&state.fallback_tile);
    let content_type = state.content_type;
    let logger = Arc::clone(&state.logger);

    Router::new()
        .route("/{z}/{x}/{y}", get(serve_tile))
        .route("/health", get(health))
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| -> Response {
                log_error!(
                    logger,
                    "Request handler panicked ({}); serving empty tile",
                    panic_detail(err.as_ref())
                );
                (
                    StatusCode::OK,
                    [
                        ("content-type", content_type),
                        ("cache-control", TILE_CACHE_CONTROL),
                    ],
                    fallback.as_ref().clone(),
                )
                    .into_response()
            },
        ))
        .with_state(state)
}

fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
