//! `SQLite` implementation of [`WarehouseRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use instock_app::ports::WarehouseRepository;
use instock_domain::error::InstockError;
use instock_domain::id::WarehouseId;
use instock_domain::warehouse::{Warehouse, WarehouseFields};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Warehouse`].
struct Wrapper(Warehouse);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Warehouse> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Warehouse {
            id: WarehouseId::new(row.try_get("id")?),
            fields: WarehouseFields {
                warehouse_name: row.try_get("warehouse_name")?,
                address: row.try_get("address")?,
                city: row.try_get("city")?,
                country: row.try_get("country")?,
                contact_name: row.try_get("contact_name")?,
                contact_position: row.try_get("contact_position")?,
                contact_phone: row.try_get("contact_phone")?,
                contact_email: row.try_get("contact_email")?,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO warehouses (warehouse_name, address, city, country, contact_name, contact_position, contact_phone, contact_email) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id";
const SELECT_BY_ID: &str = "SELECT id, warehouse_name, address, city, country, contact_name, contact_position, contact_phone, contact_email FROM warehouses WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, warehouse_name, address, city, country, contact_name, contact_position, contact_phone, contact_email FROM warehouses ORDER BY id";
const EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM warehouses WHERE id = ?)";
const UPDATE: &str = "UPDATE warehouses SET warehouse_name = ?, address = ?, city = ?, country = ?, contact_name = ?, contact_position = ?, contact_phone = ?, contact_email = ? WHERE id = ?";
const DELETE_INVENTORIES: &str = "DELETE FROM inventories WHERE warehouse_id = ?";
const DELETE_BY_ID: &str = "DELETE FROM warehouses WHERE id = ?";

/// `SQLite`-backed warehouse repository.
#[derive(Clone)]
pub struct SqliteWarehouseRepository {
    pool: SqlitePool,
}

impl SqliteWarehouseRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl WarehouseRepository for SqliteWarehouseRepository {
    fn create(
        &self,
        fields: WarehouseFields,
    ) -> impl Future<Output = Result<Warehouse, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id: i64 = sqlx::query_scalar(INSERT)
                .bind(&fields.warehouse_name)
                .bind(&fields.address)
                .bind(&fields.city)
                .bind(&fields.country)
                .bind(&fields.contact_name)
                .bind(&fields.contact_position)
                .bind(&fields.contact_phone)
                .bind(&fields.contact_email)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Warehouse {
                id: WarehouseId::new(id),
                fields,
            })
        }
    }

    fn get_by_id(
        &self,
        id: WarehouseId,
    ) -> impl Future<Output = Result<Option<Warehouse>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Warehouse>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn exists(&self, id: WarehouseId) -> impl Future<Output = Result<bool, InstockError>> + Send {
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

    fn update(
        &self,
        id: WarehouseId,
        fields: WarehouseFields,
    ) -> impl Future<Output = Result<Option<Warehouse>, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&fields.warehouse_name)
                .bind(&fields.address)
                .bind(&fields.city)
                .bind(&fields.country)
                .bind(&fields.contact_name)
                .bind(&fields.contact_position)
                .bind(&fields.contact_phone)
                .bind(&fields.contact_email)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(Warehouse { id, fields }))
        }
    }

    fn delete(&self, id: WarehouseId) -> impl Future<Output = Result<bool, InstockError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(DELETE_INVENTORIES)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
