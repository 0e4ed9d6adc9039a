use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::product::errors::PriceError;
use crate::product::errors::ProductError;
use crate::product::errors::ProductNameError;
use crate::product::models::Price;
use crate::product::models::Product;
use crate::product::models::ProductDraft;
use crate::product::models::ProductName;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod service_info;
pub mod update_product;

pub use create_product::create_product;
pub use delete_product::delete_product;
pub use get_product::get_product;
pub use list_products::list_products;
pub use service_info::service_info;
pub use update_product::update_product;

/// Successful response: the payload serialized as flat JSON.
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

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound("not found".to_string()),
            ProductError::InvalidName(_)
            | ProductError::InvalidPrice(_)
            | ProductError::InvalidPagination(_) => ApiError::UnprocessableEntity(err.to_string()),
            ProductError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// HTTP request body for creating or replacing a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseProductRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ProductNameError),

    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),
}

impl ProductRequest {
    fn try_into_draft(self) -> Result<ProductDraft, ParseProductRequestError> {
        Ok(ProductDraft {
            name: ProductName::new(self.name)?,
            description: self.description,
            price: Price::new(self.price)?,
            category: self.category,
        })
    }
}

impl From<ParseProductRequestError> for ApiError {
    fn from(err: ParseProductRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name.as_str().to_string(),
            description: product.description.clone(),
            price: product.price.value(),
            category: product.category.clone(),
        }
    }
}
