//! Warehouse: a physical storage location with contact metadata.

use serde::{Deserialize, Serialize};

use crate::contact::{is_valid_email, is_valid_phone};
use crate::error::{Field, InstockError, ValidationError};
use crate::id::WarehouseId;

/// A stored warehouse row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    #[serde(flatten)]
    pub fields: WarehouseFields,
}

/// Every writable warehouse column, already validated and trimmed.
///
/// Only [`WarehouseInput::validate`] produces values that satisfy the
/// invariants; repositories trust what they receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseFields {
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Raw warehouse payload as received from a client.
///
/// Every field is optional so that a missing field yields a field-specific
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WarehouseInput {
    pub warehouse_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub contact_name: Option<String>,
    pub contact_position: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
}

impl WarehouseInput {
    /// Check presence of every field, then the phone and email shapes.
    ///
    /// The first failing check wins.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::Validation`] with
    /// [`ValidationError::Missing`] for an absent or blank field, or
    /// [`ValidationError::Malformed`] when the phone or email shape is wrong.
    pub fn validate(self) -> Result<WarehouseFields, InstockError> {
        let fields = WarehouseFields {
            warehouse_name: required(self.warehouse_name, Field::WarehouseName)?,
            address: required(self.address, Field::Address)?,
            city: required(self.city, Field::City)?,
            country: required(self.country, Field::Country)?,
            contact_name: required(self.contact_name, Field::ContactName)?,
            contact_position: required(self.contact_position, Field::ContactPosition)?,
            contact_phone: required(self.contact_phone, Field::ContactPhone)?,
            contact_email: required(self.contact_email, Field::ContactEmail)?,
        };

        if !is_valid_phone(&fields.contact_phone) {
            return Err(ValidationError::Malformed(Field::ContactPhone).into());
        }
        if !is_valid_email(&fields.contact_email) {
            return Err(ValidationError::Malformed(Field::ContactEmail).into());
        }

        Ok(fields)
    }
}

/// Trim `value`, rejecting absent or blank strings.
pub(crate) fn required(value: Option<String>, field: Field) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ValidationError::Missing(field)),
    }
}
