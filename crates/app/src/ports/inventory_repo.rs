//! Inventory repository port: persistence and joined reads for inventory items.

use std::future::Future;

use instock_domain::error::InstockError;
use instock_domain::id::{InventoryId, WarehouseId};
use instock_domain::inventory::{
    InventoryFields, InventoryItem, InventoryListing, WarehouseInventorySummary,
};

/// Repository for persisting and querying inventory items.
///
/// Writes must be guarded by a store-level foreign key on `warehouse_id`;
/// a violation surfaces as [`InstockError::Referential`].
pub trait InventoryRepository {
    /// Insert a new item; the store assigns the id.
    fn create(
        &self,
        fields: InventoryFields,
    ) -> impl Future<Output = Result<InventoryItem, InstockError>> + Send;

    /// Get an item joined with its warehouse name.
    fn get_by_id(
        &self,
        id: InventoryId,
    ) -> impl Future<Output = Result<Option<InventoryListing>, InstockError>> + Send;

    /// Get all items joined with their warehouse names, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<InventoryListing>, InstockError>> + Send;

    /// Whether an item with this id exists.
    fn exists(&self, id: InventoryId) -> impl Future<Output = Result<bool, InstockError>> + Send;

    /// Get the items owned by one warehouse, ordered by id.
    fn find_by_warehouse(
        &self,
        warehouse_id: WarehouseId,
    ) -> impl Future<Output = Result<Vec<WarehouseInventorySummary>, InstockError>> + Send;

    /// Overwrite every column of an existing item.
    ///
    /// Resolves to `None` when no row has this id.
    fn update(
        &self,
        id: InventoryId,
        fields: InventoryFields,
    ) -> impl Future<Output = Result<Option<InventoryItem>, InstockError>> + Send;

    /// Delete an item. Resolves to `false` when no row has this id.
    fn delete(&self, id: InventoryId) -> impl Future<Output = Result<bool, InstockError>> + Send;
}
