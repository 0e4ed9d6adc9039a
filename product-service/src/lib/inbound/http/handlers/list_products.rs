use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ProductData;
use crate::domain::product::models::Page;
use crate::domain::product::models::ProductQuery;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

#[tracing::instrument(skip_all, fields(subject = %user.subject))]
pub async fn list_products(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ListProductsParams>,
) -> Result<Json<Vec<ProductData>>, ApiError> {
    let page = Page::new(
        params.page.unwrap_or(Page::DEFAULT_PAGE),
        params.per_page.unwrap_or(Page::DEFAULT_PER_PAGE),
    )
    .map_err(ProductError::from)?;

    let products = state
        .product_service
        .list_products(ProductQuery::new(page, params.category))
        .await?;

    Ok(Json(products.iter().map(ProductData::from).collect()))
}

/// Query string of the listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListProductsParams {
    page: Option<u32>,
    per_page: Option<u32>,
    category: Option<String>,
}
