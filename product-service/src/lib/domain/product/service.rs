use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductQuery;
use crate::product::errors::ProductError;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let product = self.repository.create(draft).await?;

        tracing::info!(product_id = %product.id, name = product.name.as_str(), "Product created");

        Ok(product)
    }

    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError> {
        self.repository.list(&query).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    async fn replace_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        let product = self
            .repository
            .replace(id, draft)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = %product.id, "Product replaced");

        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
