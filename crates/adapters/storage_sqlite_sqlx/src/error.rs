//! Storage-specific error type wrapping sqlx errors.

use instock_domain::error::{InstockError, ReferentialError};
use instock_domain::id::WarehouseId;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for InstockError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map an inventory write failure, turning a foreign-key violation on
/// `warehouse_id` into a [`ReferentialError`].
pub(crate) fn inventory_write_error(err: sqlx::Error, warehouse_id: WarehouseId) -> InstockError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            ReferentialError { warehouse_id }.into()
        }
        _ => StorageError::from(err).into(),
    }
}
