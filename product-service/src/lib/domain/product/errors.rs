use thiserror::Error;

use crate::product::models::ProductId;

/// Error for ProductName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("Product name must not be empty")]
    Empty,

    #[error("Product name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Price validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Price must be a finite number")]
    NotFinite,

    #[error("Price must not be negative, got {0}")]
    Negative(f64),
}

/// Error for pagination parameter validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be at least 1, got {0}")]
    PageOutOfRange(u32),

    #[error("per_page must be between {min} and {max}, got {actual}")]
    PerPageOutOfRange { min: u32, max: u32, actual: u32 },
}

/// Top-level error for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(#[from] PaginationError),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
