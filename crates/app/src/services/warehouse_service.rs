//! Warehouse service: use-cases for managing warehouses.

use instock_domain::error::{InstockError, NotFoundError};
use instock_domain::id::WarehouseId;
use instock_domain::inventory::WarehouseInventorySummary;
use instock_domain::warehouse::{Warehouse, WarehouseInput};

use crate::ports::{InventoryRepository, WarehouseRepository};

/// Application service for warehouse CRUD and the per-warehouse inventory view.
pub struct WarehouseService<W, I> {
    warehouses: W,
    inventories: I,
}

fn not_found(id: impl ToString) -> InstockError {
    NotFoundError {
        entity: "Warehouse",
        id: id.to_string(),
    }
    .into()
}

impl<W, I> WarehouseService<W, I>
where
    W: WarehouseRepository,
    I: InventoryRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(warehouses: W, inventories: I) -> Self {
        Self {
            warehouses,
            inventories,
        }
    }

    /// List all warehouses.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, InstockError> {
        self.warehouses.get_all().await
    }

    /// Look up a warehouse by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::NotFound`] when no warehouse with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_warehouse(&self, id: WarehouseId) -> Result<Warehouse, InstockError> {
        self.warehouses
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate and insert a new warehouse.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::Validation`] if a field is missing or
    /// malformed (nothing is written), or a storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_warehouse(&self, input: WarehouseInput) -> Result<Warehouse, InstockError> {
        let fields = input.validate()?;
        let created = self.warehouses.create(fields).await?;
        tracing::info!(id = %created.id, "warehouse created");
        Ok(created)
    }

    /// Validate and overwrite every field of an existing warehouse.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::Validation`] if a field is missing or
    /// malformed, [`InstockError::NotFound`] if the warehouse does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_warehouse(
        &self,
        id: WarehouseId,
        input: WarehouseInput,
    ) -> Result<Warehouse, InstockError> {
        let fields = input.validate()?;
        let updated = self
            .warehouses
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(%id, "warehouse updated");
        Ok(updated)
    }

    /// Delete a warehouse and every inventory item it owns.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::NotFound`] if the warehouse does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_warehouse(&self, id: WarehouseId) -> Result<(), InstockError> {
        if !self.warehouses.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(%id, "warehouse deleted");
        Ok(())
    }

    /// List the inventory items stored in a warehouse.
    ///
    /// An existing warehouse without items yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::NotFound`] if the warehouse does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_warehouse_inventories(
        &self,
        id: WarehouseId,
    ) -> Result<Vec<WarehouseInventorySummary>, InstockError> {
        if !self.warehouses.exists(id).await? {
            return Err(not_found(id));
        }
        self.inventories.find_by_warehouse(id).await
    }
}
