use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::StockRecordData;
use crate::domain::inventory::models::ProductId;
use crate::domain::inventory::ports::InventoryServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[tracing::instrument(skip_all, fields(subject = %user.subject, product_id = product_id))]
pub async fn get_stock(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<StockRecordData>>, ApiError> {
    let records = state
        .inventory_service
        .get_stock(ProductId(product_id))
        .await?;

    Ok(Json(records.iter().map(StockRecordData::from).collect()))
}
