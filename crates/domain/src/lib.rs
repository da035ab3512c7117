//! # instock-domain
//!
//! Pure domain model for the instock warehouse inventory service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Warehouses** (storage locations with contact metadata)
//! - Define **Inventory items** (stocked goods owned by one warehouse)
//! - Derive stock status from quantity
//! - Contain all field validation (presence, then format)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod contact;
pub mod error;
pub mod id;

pub mod inventory;
pub mod warehouse;
