//! Postgres-backed product repository.
//!
//! ## Schema
//!
//! One table, created on demand by [`PostgresProductRepository::ensure_schema`]:
//!
//! | Column | Type | Notes |
//! |--------|------|-------|
//! | `id` | `UUID` | primary key, generated by the service |
//! | `name` | `TEXT` | not null |
//! | `value` | `NUMERIC` | not null |
//! | `created_at` | `TIMESTAMPTZ` | insertion time, drives `find_all` ordering |
//!
//! ## Thread Safety
//!
//! `PostgresProductRepository` is `Send + Sync` and can be shared across tasks.
//! All operations go through the SQLx connection pool.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use storefront_core::ProductId;
use storefront_products::Product;

use super::r#trait::{ProductRepository, RepositoryError};
use crate::config::PostgresConfig;

/// Postgres-backed product repository.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Create a repository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from config and make sure the schema exists.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        let repo = Self::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Create the `products` table if it does not exist yet.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                value NUMERIC NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn row_to_product(row: &PgRow) -> Result<Product, RepositoryError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| RepositoryError::Corrupt(format!("id: {e}")))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| RepositoryError::Corrupt(format!("name: {e}")))?;
    let value: Decimal = row
        .try_get("value")
        .map_err(|e| RepositoryError::Corrupt(format!("value: {e}")))?;

    Ok(Product::from_parts(ProductId::from_uuid(id), name, value))
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, value)
            VALUES ($1, $2, $3)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                value = EXCLUDED.value
            "#,
        )
        .bind(Uuid::from(product.id()))
        .bind(product.name())
        .bind(product.value())
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, value = $3
            WHERE id = $1
            RETURNING id, name, value
            "#,
        )
        .bind(Uuid::from(product.id()))
        .bind(product.name())
        .bind(product.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_product).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, value
            FROM products
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, value
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_product).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
