//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`InstockError`]
//! via `From`, so the HTTP boundary only has one taxonomy to map.

use std::fmt;

use crate::id::WarehouseId;

/// Top-level error for every use-case in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum InstockError {
    /// Input failed a presence or format check. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed row does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A foreign key points at a row that does not exist.
    #[error(transparent)]
    Referential(#[from] ReferentialError),

    /// The store failed. The source is for logs only.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WarehouseName,
    Address,
    City,
    Country,
    ContactName,
    ContactPosition,
    ContactPhone,
    ContactEmail,
    WarehouseId,
    ItemName,
    Description,
    Category,
    Quantity,
}

impl Field {
    /// Human-readable label used in error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WarehouseName => "Warehouse name",
            Self::Address => "Address",
            Self::City => "City",
            Self::Country => "Country",
            Self::ContactName => "Contact name",
            Self::ContactPosition => "Contact position",
            Self::ContactPhone => "Phone",
            Self::ContactEmail => "Email",
            Self::WarehouseId => "Warehouse ID",
            Self::ItemName => "Item name",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Quantity => "Quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field absent, null, or blank after trimming.
    #[error("{0} is required")]
    Missing(Field),

    /// Field present but not in the expected shape.
    #[error("{0} is invalid")]
    Malformed(Field),
}

/// No row matches the requested id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found with id: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The referenced warehouse does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Warehouse with ID {warehouse_id} does not exist")]
pub struct ReferentialError {
    pub warehouse_id: WarehouseId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_field_in_missing_message() {
        let err = ValidationError::Missing(Field::WarehouseName);
        assert_eq!(err.to_string(), "Warehouse name is required");
    }

    #[test]
    fn should_name_field_in_malformed_message() {
        let err = ValidationError::Malformed(Field::ContactEmail);
        assert_eq!(err.to_string(), "Email is invalid");
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Warehouse",
            id: "9999".to_string(),
        };
        assert_eq!(err.to_string(), "Warehouse not found with id: 9999");
    }

    #[test]
    fn should_format_referential_error_with_warehouse_id() {
        let err = ReferentialError {
            warehouse_id: WarehouseId::new(42),
        };
        assert_eq!(err.to_string(), "Warehouse with ID 42 does not exist");
    }

    #[test]
    fn should_keep_inner_message_when_wrapped() {
        let err: InstockError = ValidationError::Missing(Field::City).into();
        assert_eq!(err.to_string(), "City is required");
    }
}
