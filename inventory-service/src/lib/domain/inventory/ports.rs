use async_trait::async_trait;

use crate::domain::inventory::models::ProductId;
use crate::domain::inventory::models::StockChange;
use crate::domain::inventory::models::StockRecord;
use crate::inventory::errors::InventoryError;

/// Port for inventory domain service operations.
#[async_trait]
pub trait InventoryServicePort: Send + Sync + 'static {
    /// Add stock, creating the record for the pair on first use.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn add_stock(&self, change: StockChange) -> Result<StockRecord, InventoryError>;

    /// Every stock record of a product, one per warehouse.
    ///
    /// # Errors
    /// * `ProductNotFound` - No record exists for the product
    /// * `DatabaseError` - Database operation failed
    async fn get_stock(&self, product_id: ProductId) -> Result<Vec<StockRecord>, InventoryError>;

    /// Apply a signed delta to an existing record.
    ///
    /// # Errors
    /// * `StockNotFound` - No record exists for the pair
    /// * `DatabaseError` - Database operation failed
    async fn adjust_stock(&self, change: StockChange) -> Result<StockRecord, InventoryError>;
}

/// Persistence operations for stock records.
#[async_trait]
pub trait InventoryRepository: Send + Sync + 'static {
    /// Insert the record or add to its quantity in a single atomic statement.
    async fn upsert_add(&self, change: &StockChange) -> Result<StockRecord, InventoryError>;

    /// Records of a product ordered by id.
    async fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<StockRecord>, InventoryError>;

    /// Add to the quantity of an existing record.
    ///
    /// # Returns
    /// Updated record, or None if the pair has no record
    async fn adjust(&self, change: &StockChange) -> Result<Option<StockRecord>, InventoryError>;
}
