//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod inventory_service;
pub mod warehouse_service;

#[cfg(test)]
pub(crate) mod in_memory;
