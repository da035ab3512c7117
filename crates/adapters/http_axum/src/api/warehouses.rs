//! JSON REST handlers for warehouses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use instock_app::ports::{InventoryRepository, WarehouseRepository};
use instock_domain::id::WarehouseId;
use instock_domain::inventory::WarehouseInventorySummary;
use instock_domain::warehouse::{Warehouse, WarehouseInput};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Warehouse";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Warehouse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Warehouse>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Warehouse>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the per-warehouse inventory endpoint.
pub enum InventoriesResponse {
    Ok(Json<Vec<WarehouseInventorySummary>>),
}

impl IntoResponse for InventoriesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/warehouses`
pub async fn list<W, I>(State(state): State<AppState<W, I>>) -> Result<ListResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let warehouses = state.warehouse_service.list_warehouses().await?;
    Ok(ListResponse::Ok(Json(warehouses)))
}

/// `GET /api/warehouses/{id}`
pub async fn get<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let warehouse_id: WarehouseId = parse_id(&id, ENTITY)?;
    let warehouse = state.warehouse_service.get_warehouse(warehouse_id).await?;
    Ok(GetResponse::Ok(Json(warehouse)))
}

/// `POST /api/warehouses`
pub async fn create<W, I>(
    State(state): State<AppState<W, I>>,
    payload: Result<Json<WarehouseInput>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let Json(input) = payload?;
    let created = state.warehouse_service.create_warehouse(input).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/warehouses/{id}`
pub async fn update<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
    payload: Result<Json<WarehouseInput>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let warehouse_id: WarehouseId = parse_id(&id, ENTITY)?;
    let Json(input) = payload?;
    let updated = state
        .warehouse_service
        .update_warehouse(warehouse_id, input)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/warehouses/{id}`
pub async fn delete<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let warehouse_id: WarehouseId = parse_id(&id, ENTITY)?;
    state.warehouse_service.delete_warehouse(warehouse_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/warehouses/{id}/inventories`
pub async fn inventories<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
) -> Result<InventoriesResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let warehouse_id: WarehouseId = parse_id(&id, ENTITY)?;
    let items = state
        .warehouse_service
        .list_warehouse_inventories(warehouse_id)
        .await?;
    Ok(InventoriesResponse::Ok(Json(items)))
}
