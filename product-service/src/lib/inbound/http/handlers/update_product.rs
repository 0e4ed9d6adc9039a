use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use super::ProductRequest;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[tracing::instrument(skip_all, fields(subject = %user.subject, product_id = product_id))]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(product_id): Path<i64>,
    Json(body): Json<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    state
        .product_service
        .replace_product(ProductId(product_id), body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(product.into()))
}
