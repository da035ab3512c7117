//! `SQLite` implementation of [`InventoryRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use instock_app::ports::InventoryRepository;
use instock_domain::error::InstockError;
use instock_domain::id::{InventoryId, WarehouseId};
use instock_domain::inventory::{
    InventoryFields, InventoryItem, InventoryListing, StockStatus, WarehouseInventorySummary,
};

use crate::error::{StorageError, inventory_write_error};

fn status(row: &SqliteRow) -> Result<StockStatus, sqlx::Error> {
    let text: String = row.try_get("status")?;
    text.parse().map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrapper for converting joined rows into [`InventoryListing`].
struct ListingRow(InventoryListing);

impl<'r> FromRow<'r, SqliteRow> for ListingRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(InventoryListing {
            id: InventoryId::new(row.try_get("id")?),
            warehouse_name: row.try_get("warehouse_name")?,
            item_name: row.try_get("item_name")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            status: status(row)?,
            quantity: row.try_get("quantity")?,
        }))
    }
}

/// Wrapper for converting per-warehouse rows into [`WarehouseInventorySummary`].
struct SummaryRow(WarehouseInventorySummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(WarehouseInventorySummary {
            id: InventoryId::new(row.try_get("id")?),
            item_name: row.try_get("item_name")?,
            category: row.try_get("category")?,
            status: status(row)?,
            quantity: row.try_get("quantity")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO inventories (warehouse_id, item_name, description, category, status, quantity) VALUES (?, ?, ?, ?, ?, ?) RETURNING id";
const SELECT_LISTING_BY_ID: &str = "SELECT inventories.id, warehouses.warehouse_name, inventories.item_name, inventories.description, inventories.category, inventories.status, inventories.quantity FROM inventories JOIN warehouses ON inventories.warehouse_id = warehouses.id WHERE inventories.id = ?";
const SELECT_LISTING_ALL: &str = "SELECT inventories.id, warehouses.warehouse_name, inventories.item_name, inventories.description, inventories.category, inventories.status, inventories.quantity FROM inventories JOIN warehouses ON inventories.warehouse_id = warehouses.id ORDER BY inventories.id";
const EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM inventories WHERE id = ?)";
const SELECT_BY_WAREHOUSE: &str = "SELECT id, item_name, category, status, quantity FROM inventories WHERE warehouse_id = ? ORDER BY id";
const UPDATE: &str = "UPDATE inventories SET warehouse_id = ?, item_name = ?, description = ?, category = ?, status = ?, quantity = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM inventories WHERE id = ?";

/// `SQLite`-backed inventory repository.
#[derive(Clone)]
pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl InventoryRepository for SqliteInventoryRepository {
    fn create(
        &self,
        fields: InventoryFields,
    ) -> impl Future<Output = Result<InventoryItem, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id: i64 = sqlx::query_scalar(INSERT)
                .bind(fields.warehouse_id.get())
                .bind(&fields.item_name)
                .bind(&fields.description)
                .bind(&fields.category)
                .bind(fields.status().as_str())
                .bind(fields.quantity)
                .fetch_one(&pool)
                .await
                .map_err(|err| inventory_write_error(err, fields.warehouse_id))?;

            Ok(InventoryItem::from_fields(InventoryId::new(id), fields))
        }
    }

    fn get_by_id(
        &self,
        id: InventoryId,
    ) -> impl Future<Output = Result<Option<InventoryListing>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<ListingRow> = sqlx::query_as(SELECT_LISTING_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|r| r.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<InventoryListing>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<ListingRow> = sqlx::query_as(SELECT_LISTING_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn exists(&self, id: InventoryId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let found: bool = sqlx::query_scalar(EXISTS)
                .bind(id.get())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found)
        }
    }

    fn find_by_warehouse(
        &self,
        warehouse_id: WarehouseId,
    ) -> impl Future<Output = Result<Vec<WarehouseInventorySummary>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<SummaryRow> = sqlx::query_as(SELECT_BY_WAREHOUSE)
                .bind(warehouse_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn update(
        &self,
        id: InventoryId,
        fields: InventoryFields,
    ) -> impl Future<Output = Result<Option<InventoryItem>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(fields.warehouse_id.get())
                .bind(&fields.item_name)
                .bind(&fields.description)
                .bind(&fields.category)
                .bind(fields.status().as_str())
                .bind(fields.quantity)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(|err| inventory_write_error(err, fields.warehouse_id))?;

            Ok((result.rows_affected() > 0).then(|| InventoryItem::from_fields(id, fields)))
        }
    }

    fn delete(&self, id: InventoryId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::warehouse_repo::SqliteWarehouseRepository;
    use instock_app::ports::WarehouseRepository;
    use instock_domain::warehouse::WarehouseFields;

    async fn setup() -> (SqliteInventoryRepository, SqliteWarehouseRepository) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        (
            SqliteInventoryRepository::new(db.pool().clone()),
            SqliteWarehouseRepository::new(db.pool().clone()),
        )
    }

    async fn add_warehouse(repo: &SqliteWarehouseRepository, name: &str) -> WarehouseId {
        repo.create(WarehouseFields {
            warehouse_name: name.to_string(),
            address: "300 Main Street".to_string(),
            city: "Boston".to_string(),
            country: "USA".to_string(),
            contact_name: "Brad MacDonald".to_string(),
            contact_position: "Warehouse Manager".to_string(),
            contact_phone: "+1 (646) 123-1234".to_string(),
            contact_email: "bmcdonald@instock.com".to_string(),
        })
        .await
        .unwrap()
        .id
    }

    fn test_fields(warehouse_id: WarehouseId, quantity: u32) -> InventoryFields {
        InventoryFields {
            warehouse_id,
            item_name: "Gym Bag".to_string(),
            description: "Made out of military-grade synthetic materials".to_string(),
            category: "Gear".to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_create_item_and_read_back_joined_listing() {
        let (repo, warehouses) = setup().await;
        let warehouse_id = add_warehouse(&warehouses, "Boston").await;

        let created = repo.create(test_fields(warehouse_id, 12)).await.unwrap();
        assert_eq!(created.status, StockStatus::InStock);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.warehouse_name, "Boston");
        assert_eq!(fetched.item_name, "Gym Bag");
        assert_eq!(fetched.status, StockStatus::InStock);
        assert_eq!(fetched.quantity, 12);
    }

    #[tokio::test]
    async fn should_store_out_of_stock_for_zero_quantity() {
        let (repo, warehouses) = setup().await;
        let warehouse_id = add_warehouse(&warehouses, "Boston").await;

        let created = repo.create(test_fields(warehouse_id, 0)).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, StockStatus::OutOfStock);
    }

    #[tokio::test]
    async fn should_map_foreign_key_violation_on_create() {
        let (repo, _) = setup().await;

        let result = repo.create(test_fields(WarehouseId::new(404), 1)).await;
        match result {
            Err(InstockError::Referential(err)) => {
                assert_eq!(err.warehouse_id, WarehouseId::new(404));
            }
            other => panic!("expected referential error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_map_foreign_key_violation_on_update() {
        let (repo, warehouses) = setup().await;
        let warehouse_id = add_warehouse(&warehouses, "Boston").await;
        let created = repo.create(test_fields(warehouse_id, 1)).await.unwrap();

        let result = repo
            .update(created.id, test_fields(WarehouseId::new(404), 1))
            .await;
        assert!(matches!(result, Err(InstockError::Referential(_))));

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.warehouse_name, "Boston");
    }

    #[tokio::test]
    async fn should_return_none_when_item_not_found() {
        let (repo, _) = setup().await;
        assert!(repo.get_by_id(InventoryId::new(1)).await.unwrap().is_none());
        assert!(!repo.exists(InventoryId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn should_list_all_items_with_warehouse_names() {
        let (repo, warehouses) = setup().await;
        let boston = add_warehouse(&warehouses, "Boston").await;
        let seattle = add_warehouse(&warehouses, "Seattle").await;
        repo.create(test_fields(boston, 1)).await.unwrap();
        repo.create(test_fields(seattle, 2)).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|i| i.warehouse_name.as_str()).collect();
        assert_eq!(names, vec!["Boston", "Seattle"]);
    }

    #[tokio::test]
    async fn should_find_only_items_of_given_warehouse() {
        let (repo, warehouses) = setup().await;
        let boston = add_warehouse(&warehouses, "Boston").await;
        let seattle = add_warehouse(&warehouses, "Seattle").await;
        let kept = repo.create(test_fields(boston, 0)).await.unwrap();
        repo.create(test_fields(seattle, 2)).await.unwrap();

        let items = repo.find_by_warehouse(boston).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, kept.id);
        assert_eq!(items[0].status, StockStatus::OutOfStock);
    }

    #[tokio::test]
    async fn should_update_item_and_recompute_status() {
        let (repo, warehouses) = setup().await;
        let warehouse_id = add_warehouse(&warehouses, "Boston").await;
        let created = repo.create(test_fields(warehouse_id, 5)).await.unwrap();

        let updated = repo
            .update(created.id, test_fields(warehouse_id, 0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, StockStatus::OutOfStock);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, StockStatus::OutOfStock);
        assert_eq!(fetched.quantity, 0);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_item() {
        let (repo, warehouses) = setup().await;
        let warehouse_id = add_warehouse(&warehouses, "Boston").await;

        let result = repo
            .update(InventoryId::new(999), test_fields(warehouse_id, 1))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_delete_item_and_report_whether_it_existed() {
        let (repo, warehouses) = setup().await;
        let warehouse_id = add_warehouse(&warehouses, "Boston").await;
        let created = repo.create(test_fields(warehouse_id, 1)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn should_remove_items_when_warehouse_deleted() {
        let (repo, warehouses) = setup().await;
        let boston = add_warehouse(&warehouses, "Boston").await;
        let seattle = add_warehouse(&warehouses, "Seattle").await;
        repo.create(test_fields(boston, 1)).await.unwrap();
        let survivor = repo.create(test_fields(seattle, 1)).await.unwrap();

        assert!(warehouses.delete(boston).await.unwrap());

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, survivor.id);
        assert!(repo.find_by_warehouse(boston).await.unwrap().is_empty());
    }
}
