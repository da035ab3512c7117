//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod inventories;
#[allow(clippy::missing_errors_doc)]
pub mod warehouses;

use std::str::FromStr;

use axum::Json;
use axum::Router;
use axum::routing::get;

use instock_app::ports::{InventoryRepository, WarehouseRepository};

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<W, I>() -> Router<AppState<W, I>>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        // Warehouses
        .route(
            "/warehouses",
            get(warehouses::list::<W, I>).post(warehouses::create::<W, I>),
        )
        .route(
            "/warehouses/{id}",
            get(warehouses::get::<W, I>)
                .put(warehouses::update::<W, I>)
                .delete(warehouses::delete::<W, I>),
        )
        .route(
            "/warehouses/{id}/inventories",
            get(warehouses::inventories::<W, I>),
        )
        // Inventories
        .route(
            "/inventories",
            get(inventories::list::<W, I>).post(inventories::create::<W, I>),
        )
        .route(
            "/inventories/{id}",
            get(inventories::get::<W, I>)
                .put(inventories::update::<W, I>)
                .delete(inventories::delete::<W, I>),
        )
}

async fn welcome() -> Json<MessageBody> {
    Json(MessageBody::new("Welcome to Instock API"))
}

/// Parse a path segment into a typed id, treating garbage as an unknown record.
fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| ApiError::unknown_id(entity, raw))
}
