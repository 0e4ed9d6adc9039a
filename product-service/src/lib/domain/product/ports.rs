use async_trait::async_trait;

use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductQuery;
use crate::product::errors::ProductError;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a new product.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// List one page of products ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_products(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, id: ProductId) -> Result<Product, ProductError>;

    /// Replace every field of an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn replace_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError>;

    /// Delete existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product; the store assigns the id.
    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Products matching the query, ascending by id.
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductError>;

    /// Optional product (None if not found).
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Overwrite every field of a product.
    ///
    /// # Returns
    /// Updated product, or None if no product has this id
    async fn replace(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, ProductError>;

    /// Remove a product.
    ///
    /// # Returns
    /// Whether a product was removed
    async fn delete(&self, id: ProductId) -> Result<bool, ProductError>;
}
