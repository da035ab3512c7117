//! Stock status: derived from quantity, never set by clients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether an item has any units on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out Of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Derive the status for a quantity.
    #[must_use]
    pub fn from_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else {
            Self::InStock
        }
    }

    /// Stored and serialized text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out Of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored status column holds unknown text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stock status: {0}")]
pub struct UnknownStockStatus(pub String);

impl FromStr for StockStatus {
    type Err = UnknownStockStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Stock" => Ok(Self::InStock),
            "Out Of Stock" => Ok(Self::OutOfStock),
            other => Err(UnknownStockStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_out_of_stock_when_quantity_is_zero() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
    }

    #[test]
    fn should_be_in_stock_when_quantity_is_positive() {
        assert_eq!(StockStatus::from_quantity(1), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(500), StockStatus::InStock);
    }

    #[test]
    fn should_serialize_with_display_text() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, r#""Out Of Stock""#);
    }

    #[test]
    fn should_parse_stored_text() {
        assert_eq!(
            "In Stock".parse::<StockStatus>().unwrap(),
            StockStatus::InStock
        );
        assert!("in stock".parse::<StockStatus>().is_err());
    }
}
