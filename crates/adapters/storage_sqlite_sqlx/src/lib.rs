//! # instock-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `instock-app::ports`
//! - Manage `SQLite` connection pool lifecycle, with foreign keys enforced
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `instock-app` (for port traits) and `instock-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod inventory_repo;
mod pool;
mod warehouse_repo;

pub use error::StorageError;
pub use inventory_repo::SqliteInventoryRepository;
pub use pool::{Config, Database};
pub use warehouse_repo::SqliteWarehouseRepository;
