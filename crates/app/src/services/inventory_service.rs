//! Inventory service: use-cases for managing inventory items.

use instock_domain::error::{InstockError, NotFoundError, ReferentialError};
use instock_domain::id::{InventoryId, WarehouseId};
use instock_domain::inventory::{InventoryInput, InventoryItem, InventoryListing};

use crate::ports::{InventoryRepository, WarehouseRepository};

/// Application service for inventory CRUD.
///
/// The warehouse existence check before a write only gives the caller a clear
/// message early; the repository's foreign key stays the authoritative guard.
pub struct InventoryService<I, W> {
    inventories: I,
    warehouses: W,
}

fn not_found(id: impl ToString) -> InstockError {
    NotFoundError {
        entity: "Inventory item",
        id: id.to_string(),
    }
    .into()
}

impl<I, W> InventoryService<I, W>
where
    I: InventoryRepository,
    W: WarehouseRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(inventories: I, warehouses: W) -> Self {
        Self {
            inventories,
            warehouses,
        }
    }

    /// List every item with the name of its warehouse.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_inventories(&self) -> Result<Vec<InventoryListing>, InstockError> {
        self.inventories.get_all().await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_inventory(&self, id: InventoryId) -> Result<InventoryListing, InstockError> {
        self.inventories
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate and insert a new item. Its status is derived from the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::Validation`] if a field is missing or
    /// malformed, [`InstockError::Referential`] if the warehouse does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_inventory(
        &self,
        input: InventoryInput,
    ) -> Result<InventoryItem, InstockError> {
        let fields = input.validate()?;
        self.ensure_warehouse(fields.warehouse_id).await?;
        let created = self.inventories.create(fields).await?;
        tracing::info!(
            id = %created.id,
            warehouse_id = %created.warehouse_id,
            "inventory item created"
        );
        Ok(created)
    }

    /// Validate and overwrite every field of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::Validation`] if a field is missing or
    /// malformed, [`InstockError::NotFound`] if the item does not exist,
    /// [`InstockError::Referential`] if the target warehouse does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_inventory(
        &self,
        id: InventoryId,
        input: InventoryInput,
    ) -> Result<InventoryItem, InstockError> {
        let fields = input.validate()?;
        if !self.inventories.exists(id).await? {
            return Err(not_found(id));
        }
        self.ensure_warehouse(fields.warehouse_id).await?;
        let updated = self
            .inventories
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(%id, "inventory item updated");
        Ok(updated)
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::NotFound`] if the item does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_inventory(&self, id: InventoryId) -> Result<(), InstockError> {
        if !self.inventories.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(%id, "inventory item deleted");
        Ok(())
    }

    async fn ensure_warehouse(&self, warehouse_id: WarehouseId) -> Result<(), InstockError> {
        if self.warehouses.exists(warehouse_id).await? {
            Ok(())
        } else {
            Err(ReferentialError { warehouse_id }.into())
        }
    }
}
