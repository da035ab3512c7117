//! In-memory store implementing both repository ports, for service tests.
//!
//! Mirrors the relational behaviour the services rely on: ids are assigned
//! on insert, the `warehouse_id` foreign key is enforced, and deleting a
//! warehouse removes its items.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use instock_domain::error::{InstockError, ReferentialError};
use instock_domain::id::{InventoryId, WarehouseId};
use instock_domain::inventory::{
    InventoryFields, InventoryItem, InventoryListing, WarehouseInventorySummary,
};
use instock_domain::warehouse::{Warehouse, WarehouseFields};

use crate::ports::{InventoryRepository, WarehouseRepository};

#[derive(Default)]
struct Tables {
    next_id: i64,
    warehouses: BTreeMap<WarehouseId, WarehouseFields>,
    inventories: BTreeMap<InventoryId, InventoryFields>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_warehouse(&self, fields: &InventoryFields) -> Result<(), InstockError> {
        if self.warehouses.contains_key(&fields.warehouse_id) {
            Ok(())
        } else {
            Err(ReferentialError {
                warehouse_id: fields.warehouse_id,
            }
            .into())
        }
    }

    fn listing(&self, id: InventoryId, fields: &InventoryFields) -> Option<InventoryListing> {
        let warehouse = self.warehouses.get(&fields.warehouse_id)?;
        Some(InventoryListing {
            id,
            warehouse_name: warehouse.warehouse_name.clone(),
            item_name: fields.item_name.clone(),
            description: fields.description.clone(),
            category: fields.category.clone(),
            status: fields.status(),
            quantity: fields.quantity,
        })
    }
}

/// Shared tables behind both ports. Clones see the same data.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryStore {
    /// Number of repository calls made so far, across both ports.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Remove a warehouse row without touching its items, as a concurrent
    /// writer racing the service would.
    pub(crate) fn drop_warehouse_row(&self, id: WarehouseId) {
        self.tables.lock().unwrap().warehouses.remove(&id);
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tables.lock().unwrap()
    }
}

impl WarehouseRepository for InMemoryStore {
    fn create(
        &self,
        fields: WarehouseFields,
    ) -> impl Future<Output = Result<Warehouse, InstockError>> + Send {
        let mut tables = self.tables();
        let id = WarehouseId::new(tables.next_id());
        tables.warehouses.insert(id, fields.clone());
        async move { Ok(Warehouse { id, fields }) }
    }

    fn get_by_id(
        &self,
        id: WarehouseId,
    ) -> impl Future<Output = Result<Option<Warehouse>, InstockError>> + Send {
        let tables = self.tables();
        let result = tables.warehouses.get(&id).map(|fields| Warehouse {
            id,
            fields: fields.clone(),
        });
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Warehouse>, InstockError>> + Send {
        let tables = self.tables();
        let result: Vec<Warehouse> = tables
            .warehouses
            .iter()
            .map(|(id, fields)| Warehouse {
                id: *id,
                fields: fields.clone(),
            })
            .collect();
        async { Ok(result) }
    }

    fn exists(&self, id: WarehouseId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let result = self.tables().warehouses.contains_key(&id);
        async move { Ok(result) }
    }

    fn update(
        &self,
        id: WarehouseId,
        fields: WarehouseFields,
    ) -> impl Future<Output = Result<Option<Warehouse>, InstockError>> + Send {
        let mut tables = self.tables();
        let result = tables.warehouses.get_mut(&id).map(|stored| {
            *stored = fields.clone();
            Warehouse { id, fields }
        });
        async { Ok(result) }
    }

    fn delete(&self, id: WarehouseId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let mut tables = self.tables();
        let removed = tables.warehouses.remove(&id).is_some();
        if removed {
            tables
                .inventories
                .retain(|_, fields| fields.warehouse_id != id);
        }
        async move { Ok(removed) }
    }
}

impl InventoryRepository for InMemoryStore {
    fn create(
        &self,
        fields: InventoryFields,
    ) -> impl Future<Output = Result<InventoryItem, InstockError>> + Send {
        let mut tables = self.tables();
        let result = tables.check_warehouse(&fields).map(|()| {
            let id = InventoryId::new(tables.next_id());
            tables.inventories.insert(id, fields.clone());
            InventoryItem::from_fields(id, fields)
        });
        async { result }
    }

    fn get_by_id(
        &self,
        id: InventoryId,
    ) -> impl Future<Output = Result<Option<InventoryListing>, InstockError>> + Send {
        let tables = self.tables();
        let result = tables
            .inventories
            .get(&id)
            .and_then(|fields| tables.listing(id, fields));
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<InventoryListing>, InstockError>> + Send {
        let tables = self.tables();
        let result: Vec<InventoryListing> = tables
            .inventories
            .iter()
            .filter_map(|(id, fields)| tables.listing(*id, fields))
            .collect();
        async { Ok(result) }
    }

    fn exists(&self, id: InventoryId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let result = self.tables().inventories.contains_key(&id);
        async move { Ok(result) }
    }

    fn find_by_warehouse(
        &self,
        warehouse_id: WarehouseId,
    ) -> impl Future<Output = Result<Vec<WarehouseInventorySummary>, InstockError>> + Send {
        let tables = self.tables();
        let result: Vec<WarehouseInventorySummary> = tables
            .inventories
            .iter()
            .filter(|(_, fields)| fields.warehouse_id == warehouse_id)
            .map(|(id, fields)| WarehouseInventorySummary {
                id: *id,
                item_name: fields.item_name.clone(),
                category: fields.category.clone(),
                status: fields.status(),
                quantity: fields.quantity,
            })
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: InventoryId,
        fields: InventoryFields,
    ) -> impl Future<Output = Result<Option<InventoryItem>, InstockError>> + Send {
        let mut tables = self.tables();
        let result = match tables.check_warehouse(&fields) {
            Err(err) => Err(err),
            Ok(()) => Ok(tables.inventories.get_mut(&id).map(|stored| {
                *stored = fields.clone();
                InventoryItem::from_fields(id, fields)
            })),
        };
        async { result }
    }

    fn delete(&self, id: InventoryId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let removed = self.tables().inventories.remove(&id).is_some();
        async move { Ok(removed) }
    }
}
