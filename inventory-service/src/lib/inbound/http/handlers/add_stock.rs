use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::StockRecordData;
use crate::domain::inventory::models::ProductId;
use crate::domain::inventory::models::StockChange;
use crate::domain::inventory::models::Warehouse;
use crate::domain::inventory::ports::InventoryServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::inventory::errors::InventoryError;

/// Adds to the stock of a product, creating the warehouse record on first use.
#[tracing::instrument(skip_all, fields(subject = %user.subject, product_id = body.product_id))]
pub async fn add_stock(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(body): Json<AddStockRequest>,
) -> Result<ApiSuccess<StockRecordData>, ApiError> {
    let change = StockChange {
        product_id: ProductId(body.product_id),
        warehouse: Warehouse::new(body.warehouse).map_err(InventoryError::from)?,
        delta: body.quantity,
    };

    state
        .inventory_service
        .add_stock(change)
        .await
        .map_err(ApiError::from)
        .map(|ref record| ApiSuccess::new(record.into()))
}

/// HTTP request body for adding stock (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddStockRequest {
    product_id: i64,
    quantity: i64,
    #[serde(default)]
    warehouse: Option<String>,
}
