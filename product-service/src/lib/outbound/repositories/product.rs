use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::ProductQuery;
use crate::domain::product::ports::ProductRepository;

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRecord {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    category: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId(record.id),
            name: ProductName::new(record.name)?,
            description: record.description,
            price: Price::new(record.price)?,
            category: record.category,
        })
    }
}

fn database_error(e: sqlx::Error) -> ProductError {
    ProductError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[tracing::instrument(skip_all, err)]
    async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, category)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.description.as_deref())
        .bind(draft.price.value())
        .bind(draft.category.as_deref())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(Product {
            id: ProductId(result.last_insert_rowid()),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
        })
    }

    #[tracing::instrument(skip(self), err)]
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, ProductError> {
        let records = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, description, price, category
            FROM products
            WHERE ?1 IS NULL OR category = ?1
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(query.category.as_deref())
        .bind(query.page.limit())
        .bind(query.page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        records.into_iter().map(Product::try_from).collect()
    }

    #[tracing::instrument(skip(self), fields(product_id = id.0), err)]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT id, name, description, price, category
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        record.map(Product::try_from).transpose()
    }

    #[tracing::instrument(skip(self, draft), fields(product_id = id.0), err)]
    async fn replace(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, ProductError> {
        let record = sqlx::query_as::<_, ProductRecord>(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, category = ?
            WHERE id = ?
            RETURNING id, name, description, price, category
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.description.as_deref())
        .bind(draft.price.value())
        .bind(draft.category.as_deref())
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        record.map(Product::try_from).transpose()
    }

    #[tracing::instrument(skip(self), fields(product_id = id.0), err)]
    async fn delete(&self, id: ProductId) -> Result<bool, ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
