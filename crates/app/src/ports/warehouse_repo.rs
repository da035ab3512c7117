//! Warehouse repository port: persistence for warehouses.

use std::future::Future;

use instock_domain::error::InstockError;
use instock_domain::id::WarehouseId;
use instock_domain::warehouse::{Warehouse, WarehouseFields};

/// Repository for persisting and querying [`Warehouse`]s.
pub trait WarehouseRepository {
    /// Insert a new warehouse; the store assigns the id.
    fn create(
        &self,
        fields: WarehouseFields,
    ) -> impl Future<Output = Result<Warehouse, InstockError>> + Send;

    /// Get a warehouse by its id.
    fn get_by_id(
        &self,
        id: WarehouseId,
    ) -> impl Future<Output = Result<Option<Warehouse>, InstockError>> + Send;

    /// Get all warehouses, ordered by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Warehouse>, InstockError>> + Send;

    /// Whether a warehouse with this id exists.
    fn exists(&self, id: WarehouseId) -> impl Future<Output = Result<bool, InstockError>> + Send;

    /// Overwrite every column of an existing warehouse.
    ///
    /// Resolves to `None` when no row has this id.
    fn update(
        &self,
        id: WarehouseId,
        fields: WarehouseFields,
    ) -> impl Future<Output = Result<Option<Warehouse>, InstockError>> + Send;

    /// Delete a warehouse together with all of its inventory items, atomically.
    ///
    /// Resolves to `false` when no row has this id.
    fn delete(&self, id: WarehouseId) -> impl Future<Output = Result<bool, InstockError>> + Send;
}
