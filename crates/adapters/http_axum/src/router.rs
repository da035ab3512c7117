//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use instock_app::ports::{InventoryRepository, WarehouseRepository};

use crate::error::MessageBody;
use crate::state::AppState;

/// Build the CORS layer for the given allowed origin.
///
/// With no origin every origin is allowed.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] when `origin` is not a valid header value.
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::permissive());
    };
    Ok(CorsLayer::new()
        .allow_origin(origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and answers every unmatched path, or a known
/// path with the wrong method, with a JSON 404. Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<W, I>(state: AppState<W, I>, cors: CorsLayer) -> Router
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody::new("Route not found")),
    )
}
