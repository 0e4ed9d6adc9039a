use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
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

#[tracing::instrument(
    skip_all,
    fields(subject = %user.subject, product_id = product_id, adjust = params.adjust)
)]
pub async fn adjust_stock(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(product_id): Path<i64>,
    Query(params): Query<AdjustStockParams>,
) -> Result<ApiSuccess<StockRecordData>, ApiError> {
    let change = StockChange {
        product_id: ProductId(product_id),
        warehouse: Warehouse::new(params.warehouse).map_err(InventoryError::from)?,
        delta: params.adjust,
    };

    state
        .inventory_service
        .adjust_stock(change)
        .await
        .map_err(ApiError::from)
        .map(|ref record| ApiSuccess::new(record.into()))
}

/// Query string of the adjust endpoint: a signed delta and optional warehouse
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdjustStockParams {
    adjust: i64,
    warehouse: Option<String>,
}
