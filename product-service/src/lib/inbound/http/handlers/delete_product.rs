use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[tracing::instrument(skip_all, fields(subject = %user.subject, product_id = product_id))]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(product_id): Path<i64>,
) -> Result<ApiSuccess<DeleteProductResponseData>, ApiError> {
    state
        .product_service
        .delete_product(ProductId(product_id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(DeleteProductResponseData { ok: true }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteProductResponseData {
    pub ok: bool,
}
