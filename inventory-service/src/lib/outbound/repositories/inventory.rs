use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::models::ProductId;
use crate::domain::inventory::models::StockChange;
use crate::domain::inventory::models::StockRecord;
use crate::domain::inventory::models::StockRecordId;
use crate::domain::inventory::models::Warehouse;
use crate::domain::inventory::ports::InventoryRepository;

pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InventoryRow {
    id: i64,
    product_id: i64,
    quantity: i64,
    warehouse: String,
}

impl TryFrom<InventoryRow> for StockRecord {
    type Error = InventoryError;

    fn try_from(row: InventoryRow) -> Result<Self, Self::Error> {
        Ok(StockRecord {
            id: StockRecordId(row.id),
            product_id: ProductId(row.product_id),
            warehouse: Warehouse::new(Some(row.warehouse))?,
            quantity: row.quantity,
        })
    }
}

fn database_error(e: sqlx::Error) -> InventoryError {
    InventoryError::DatabaseError(e.to_string())
}

/// Maps the NOT NULL violation raised by an overflowing quantity update.
fn write_error(e: sqlx::Error, change: &StockChange) -> InventoryError {
    match e.as_database_error().map(|db_err| db_err.kind()) {
        Some(ErrorKind::NotNullViolation) => InventoryError::QuantityOutOfRange {
            product_id: change.product_id,
            warehouse: change.warehouse.clone(),
        },
        _ => database_error(e),
    }
}

#[async_trait]
impl InventoryRepository for SqliteInventoryRepository {
    // A sum outside the i64 range is replaced by NULL, which the NOT NULL constraint
    // rejects before anything is written. SQLite would otherwise store it as REAL.
    #[tracing::instrument(skip(self), err)]
    async fn upsert_add(&self, change: &StockChange) -> Result<StockRecord, InventoryError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            INSERT INTO inventory (product_id, quantity, warehouse)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (product_id, warehouse)
            DO UPDATE SET quantity = CASE
                WHEN excluded.quantity > 0 AND quantity > ?4 - excluded.quantity THEN NULL
                WHEN excluded.quantity < 0 AND quantity < ?5 - excluded.quantity THEN NULL
                ELSE quantity + excluded.quantity
            END
            RETURNING id, product_id, quantity, warehouse
            "#,
        )
        .bind(change.product_id.0)
        .bind(change.delta)
        .bind(change.warehouse.as_str())
        .bind(i64::MAX)
        .bind(i64::MIN)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, change))?;

        StockRecord::try_from(row)
    }

    #[tracing::instrument(skip(self), fields(product_id = product_id.0), err)]
    async fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<StockRecord>, InventoryError> {
        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT id, product_id, quantity, warehouse
            FROM inventory
            WHERE product_id = ?
            ORDER BY id
            "#,
        )
        .bind(product_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(StockRecord::try_from).collect()
    }

    #[tracing::instrument(skip(self), err)]
    async fn adjust(&self, change: &StockChange) -> Result<Option<StockRecord>, InventoryError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            r#"
            UPDATE inventory
            SET quantity = CASE
                WHEN ?1 > 0 AND quantity > ?4 - ?1 THEN NULL
                WHEN ?1 < 0 AND quantity < ?5 - ?1 THEN NULL
                ELSE quantity + ?1
            END
            WHERE product_id = ?2 AND warehouse = ?3
            RETURNING id, product_id, quantity, warehouse
            "#,
        )
        .bind(change.delta)
        .bind(change.product_id.0)
        .bind(change.warehouse.as_str())
        .bind(i64::MAX)
        .bind(i64::MIN)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, change))?;

        row.map(StockRecord::try_from).transpose()
    }
}
