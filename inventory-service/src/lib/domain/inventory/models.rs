use std::fmt;

use crate::inventory::errors::WarehouseError;

/// Stock of one product held in one warehouse.
///
/// At most one record exists per `(product_id, warehouse)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    pub id: StockRecordId,
    pub product_id: ProductId,
    pub warehouse: Warehouse,
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StockRecordId(pub i64);

/// Identifier of a product owned by the product service.
///
/// Not checked against that service: stock may be recorded for any id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Warehouse name value type. Absent or empty names mean `"default"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Warehouse(String);

impl Warehouse {
    pub const DEFAULT: &'static str = "default";
    const MAX_LENGTH: usize = 100;

    /// # Errors
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: Option<String>) -> Result<Self, WarehouseError> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(Self::default()),
        };

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(WarehouseError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Signed change applied to the stock of a product in a warehouse.
///
/// Negative values are accepted and may take the stock below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub product_id: ProductId,
    pub warehouse: Warehouse,
    pub delta: i64,
}
