//! Inventory item: a stocked good belonging to exactly one warehouse.
//!
//! Three read shapes exist because callers want different joins:
//! [`InventoryItem`] is the raw row, [`InventoryListing`] carries the owning
//! warehouse's name instead of its id, and [`WarehouseInventorySummary`] is
//! the short form listed under a single warehouse.

mod status;

pub use status::{StockStatus, UnknownStockStatus};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Field, InstockError, ValidationError};
use crate::id::{InventoryId, WarehouseId};
use crate::warehouse::required;

/// A stored inventory row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryId,
    pub warehouse_id: WarehouseId,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: StockStatus,
    pub quantity: u32,
}

impl InventoryItem {
    /// Assemble a row from its id and validated fields.
    #[must_use]
    pub fn from_fields(id: InventoryId, fields: InventoryFields) -> Self {
        Self {
            id,
            warehouse_id: fields.warehouse_id,
            status: fields.status(),
            item_name: fields.item_name,
            description: fields.description,
            category: fields.category,
            quantity: fields.quantity,
        }
    }
}

/// Inventory row joined with the owning warehouse's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryListing {
    pub id: InventoryId,
    pub warehouse_name: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: StockStatus,
    pub quantity: u32,
}

/// Short inventory row listed under one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseInventorySummary {
    pub id: InventoryId,
    pub item_name: String,
    pub category: String,
    pub status: StockStatus,
    pub quantity: u32,
}

/// Every writable inventory column, validated and trimmed.
///
/// There is no `status` field: it is always [`InventoryFields::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryFields {
    pub warehouse_id: WarehouseId,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
}

impl InventoryFields {
    /// Status derived from the quantity.
    #[must_use]
    pub fn status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }
}

/// Raw inventory payload as received from a client.
///
/// `warehouse_id` and `quantity` accept either a JSON number or a numeric
/// string. Any `status` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryInput {
    pub warehouse_id: Option<Value>,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<Value>,
}

impl InventoryInput {
    /// Check presence of every field, then the numeric shapes.
    ///
    /// Whether the warehouse exists is not checked here; that needs the store.
    ///
    /// # Errors
    ///
    /// Returns [`InstockError::Validation`] with
    /// [`ValidationError::Missing`] for an absent or blank field, or
    /// [`ValidationError::Malformed`] when `warehouse_id` is not a positive
    /// integer or `quantity` is not a non-negative whole number.
    pub fn validate(self) -> Result<InventoryFields, InstockError> {
        let warehouse_id = present(self.warehouse_id, Field::WarehouseId)?;
        let item_name = required(self.item_name, Field::ItemName)?;
        let description = required(self.description, Field::Description)?;
        let category = required(self.category, Field::Category)?;
        let quantity = present(self.quantity, Field::Quantity)?;

        let warehouse_id = whole_number(&warehouse_id)
            .filter(|id| *id > 0)
            .map(WarehouseId::new)
            .ok_or(ValidationError::Malformed(Field::WarehouseId))?;
        let quantity = whole_number(&quantity)
            .and_then(|value| u32::try_from(value).ok())
            .ok_or(ValidationError::Malformed(Field::Quantity))?;

        Ok(InventoryFields {
            warehouse_id,
            item_name,
            description,
            category,
            quantity,
        })
    }
}

fn present(value: Option<Value>, field: Field) -> Result<Value, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing(field)),
        Some(Value::String(text)) if text.trim().is_empty() => Err(ValidationError::Missing(field)),
        Some(value) => Ok(value),
    }
}

/// Interpret a JSON number or numeric string as a finite whole number.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole_number(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            number.as_f64()?
        }
        Value::String(text) => {
            let text = text.trim();
            if let Ok(int) = text.parse::<i64>() {
                return Some(int);
            }
            text.parse::<f64>().ok()?
        }
        _ => return None,
    };

    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.is_finite() && float.fract() == 0.0 && in_range).then(|| float as i64)
}
