//! Shared application state for axum handlers.

use std::sync::Arc;

use instock_app::ports::{InventoryRepository, WarehouseRepository};
use instock_app::services::inventory_service::InventoryService;
use instock_app::services::warehouse_service::WarehouseService;

/// Application state shared across all axum handlers.
///
/// Generic over the two repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<W, I> {
    /// Warehouse CRUD service.
    pub warehouse_service: Arc<WarehouseService<W, I>>,
    /// Inventory CRUD service.
    pub inventory_service: Arc<InventoryService<I, W>>,
}

impl<W, I> Clone for AppState<W, I> {
    fn clone(&self) -> Self {
        Self {
            warehouse_service: Arc::clone(&self.warehouse_service),
            inventory_service: Arc::clone(&self.inventory_service),
        }
    }
}

impl<W, I> AppState<W, I>
where
    W: WarehouseRepository + Send + Sync + 'static,
    I: InventoryRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        warehouse_service: WarehouseService<W, I>,
        inventory_service: InventoryService<I, W>,
    ) -> Self {
        Self {
            warehouse_service: Arc::new(warehouse_service),
            inventory_service: Arc::new(inventory_service),
        }
    }
}
