use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::inventory::errors::InventoryError;
use crate::inventory::models::StockRecord;

pub mod add_stock;
pub mod adjust_stock;
pub mod get_stock;
pub mod service_info;

pub use add_stock::add_stock;
pub use adjust_stock::adjust_stock;
pub use get_stock::get_stock;
pub use service_info::service_info;

/// Standardized API success response
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.data)).into_response()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::ProductNotFound(_) | InventoryError::StockNotFound { .. } => {
                ApiError::NotFound("not found".to_string())
            }
            InventoryError::InvalidWarehouse(_) | InventoryError::QuantityOutOfRange { .. } => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            InventoryError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockRecordData {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub warehouse: String,
}

impl From<&StockRecord> for StockRecordData {
    fn from(record: &StockRecord) -> Self {
        Self {
            id: record.id.0,
            product_id: record.product_id.0,
            quantity: record.quantity,
            warehouse: record.warehouse.as_str().to_string(),
        }
    }
}
