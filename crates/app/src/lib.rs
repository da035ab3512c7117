//! # instock-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WarehouseRepository`: CRUD for warehouses, cascading delete
//!   - `InventoryRepository`: CRUD for inventory items plus joined reads
//! - Define **driving/inbound ports** as use-case structs:
//!   - `WarehouseService`: list, get, create, update, delete, list inventory
//!   - `InventoryService`: list, get, create, update, delete
//! - Order checks: field presence, then field format, then store lookups
//!
//! ## Dependency rule
//! Depends on `instock-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
