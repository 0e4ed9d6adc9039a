use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inventory::models::ProductId;
use crate::domain::inventory::models::StockChange;
use crate::domain::inventory::models::StockRecord;
use crate::inventory::errors::InventoryError;
use crate::inventory::ports::InventoryRepository;
use crate::inventory::ports::InventoryServicePort;

/// Domain service implementation for inventory operations.
pub struct InventoryService<IR>
where
    IR: InventoryRepository,
{
    repository: Arc<IR>,
}

impl<IR> InventoryService<IR>
where
    IR: InventoryRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> InventoryServicePort for InventoryService<IR>
where
    IR: InventoryRepository,
{
    async fn add_stock(&self, change: StockChange) -> Result<StockRecord, InventoryError> {
        let record = self.repository.upsert_add(&change).await?;

        tracing::info!(
            product_id = %record.product_id,
            warehouse = %record.warehouse,
            added = change.delta,
            quantity = record.quantity,
            "Stock added"
        );

        Ok(record)
    }

    async fn get_stock(&self, product_id: ProductId) -> Result<Vec<StockRecord>, InventoryError> {
        let records = self.repository.find_by_product(product_id).await?;

        if records.is_empty() {
            return Err(InventoryError::ProductNotFound(product_id));
        }

        Ok(records)
    }

    async fn adjust_stock(&self, change: StockChange) -> Result<StockRecord, InventoryError> {
        let record = self.repository.adjust(&change).await?.ok_or_else(|| {
            InventoryError::StockNotFound {
                product_id: change.product_id,
                warehouse: change.warehouse.clone(),
            }
        })?;

        if record.quantity < 0 {
            tracing::warn!(
                product_id = %record.product_id,
                warehouse = %record.warehouse,
                quantity = record.quantity,
                "Stock below zero"
            );
        }

        Ok(record)
    }
}
