use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::ProductId;
use storefront_products::Product;

/// Repository operation error.
///
/// These are **infrastructure errors** (storage faults) as opposed to domain
/// errors (validation, not found). A missing product is not an error here; it is
/// reported as `None` / `false` and mapped by the service layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("corrupt stored record: {0}")]
    Corrupt(String),
}

/// Persistent collection of products, keyed by `ProductId`.
///
/// ## Contract
///
/// - `save` inserts a new product or overwrites the one with the same id.
///   Only used for freshly created products.
/// - `update` overwrites an existing product and never inserts: a product
///   deleted in the meantime stays deleted and `None` is returned.
/// - `find_all` returns products in insertion order. Overwriting a product
///   does not move it.
/// - `delete` reports whether a product was actually removed.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        (**self).save(product).await
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
        (**self).update(product).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        (**self).delete(id).await
    }
}
