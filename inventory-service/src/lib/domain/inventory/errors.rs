use thiserror::Error;

use crate::inventory::models::ProductId;
use crate::inventory::models::Warehouse;

/// Error for Warehouse validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WarehouseError {
    #[error("Warehouse name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all inventory operations
#[derive(Debug, Clone, Error)]
pub enum InventoryError {
    #[error("Invalid warehouse: {0}")]
    InvalidWarehouse(#[from] WarehouseError),

    #[error("No inventory for product {0}")]
    ProductNotFound(ProductId),

    #[error("No inventory for product {product_id} in warehouse {warehouse}")]
    StockNotFound {
        product_id: ProductId,
        warehouse: Warehouse,
    },

    #[error("Quantity of product {product_id} in warehouse {warehouse} would overflow")]
    QuantityOutOfRange {
        product_id: ProductId,
        warehouse: Warehouse,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
