//! JSON REST handlers for inventory items.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use instock_app::ports::{InventoryRepository, WarehouseRepository};
use instock_domain::id::InventoryId;
use instock_domain::inventory::{InventoryInput, InventoryItem, InventoryListing};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

const ENTITY: &str = "Inventory item";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<InventoryListing>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<InventoryListing>),
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
    Created(Json<InventoryItem>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<InventoryItem>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
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

/// `GET /api/inventories`
pub async fn list<W, I>(State(state): State<AppState<W, I>>) -> Result<ListResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let items = state.inventory_service.list_inventories().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `GET /api/inventories/{id}`
pub async fn get<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let inventory_id: InventoryId = parse_id(&id, ENTITY)?;
    let item = state.inventory_service.get_inventory(inventory_id).await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /api/inventories`
pub async fn create<W, I>(
    State(state): State<AppState<W, I>>,
    payload: Result<Json<InventoryInput>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let Json(input) = payload?;
    let created = state.inventory_service.create_inventory(input).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/inventories/{id}`
pub async fn update<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
    payload: Result<Json<InventoryInput>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let inventory_id: InventoryId = parse_id(&id, ENTITY)?;
    let Json(input) = payload?;
    let updated = state
        .inventory_service
        .update_inventory(inventory_id, input)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/inventories/{id}`
pub async fn delete<W, I>(
    State(state): State<AppState<W, I>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    let inventory_id: InventoryId = parse_id(&id, ENTITY)?;
    state.inventory_service.delete_inventory(inventory_id).await?;
    Ok(DeleteResponse::NoContent)
}
