//! # instock-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api` (`/api/warehouses`,
//!   `/api/inventories`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, with `{"message": …}`
//!   bodies for every error
//! - Apply CORS and request tracing layers
//!
//! ## Dependency rule
//! Depends on `instock-app` (for port traits and services) and `instock-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
