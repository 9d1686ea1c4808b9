//! Product service (application-level orchestration).
//!
//! Each operation is one independent unit of work against the injected
//! [`ProductRepository`]:
//!
//! ```text
//! create(record)      -> new id -> save
//! list()              -> find_all
//! get(id)             -> find_by_id           (None => NotFound)
//! update(id, record)  -> find_by_id -> overwrite -> update   (None => NotFound)
//! delete(id)          -> delete               (false => NotFound)
//! ```
//!
//! Input validation happens when the caller builds a [`ProductRecord`], so a
//! rejected payload never reaches the repository.

use thiserror::Error;

use storefront_core::ProductId;
use storefront_products::{Product, ProductRecord};

use crate::repository::{ProductRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The referenced product does not exist (never created, or deleted).
    #[error("product not found")]
    NotFound,

    /// The backing store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Product CRUD over an explicit repository.
#[derive(Debug)]
pub struct ProductService<R> {
    repository: R,
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Store a new product under a freshly generated id.
    pub async fn create(&self, record: ProductRecord) -> Result<Product, ServiceError> {
        let product = Product::create(ProductId::new(), record);
        let saved = self.repository.save(product).await?;
        tracing::info!(product_id = %saved.id(), "product created");
        Ok(saved)
    }

    /// All stored products, in insertion order.
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get(&self, id: ProductId) -> Result<Product, ServiceError> {
        match self.repository.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                tracing::debug!(product_id = %id, "product lookup missed");
                Err(ServiceError::NotFound)
            }
        }
    }

    /// Overwrite every mutable field of an existing product.
    pub async fn update(&self, id: ProductId, record: ProductRecord) -> Result<Product, ServiceError> {
        let mut product = self.get(id).await?;
        product.overwrite(record);
        match self.repository.update(product).await? {
            Some(updated) => {
                tracing::info!(product_id = %id, "product updated");
                Ok(updated)
            }
            None => {
                tracing::debug!(product_id = %id, "product deleted before update landed");
                Err(ServiceError::NotFound)
            }
        }
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            tracing::debug!(product_id = %id, "delete of unknown product");
            return Err(ServiceError::NotFound);
        }
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn service() -> ProductService<Arc<InMemoryProductRepository>> {
        ProductService::new(Arc::new(InMemoryProductRepository::new()))
    }

    fn record(name: &str, cents: i64) -> ProductRecord {
        ProductRecord::new(Some(name.to_string()), Some(Decimal::new(cents, 2))).unwrap()
    }

    #[tokio::test]
    async fn create_returns_fresh_id_and_input_fields() {
        let svc = service();
        let a = svc.create(record("Chair", 4990)).await.unwrap();
        let b = svc.create(record("Chair", 4990)).await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), "Chair");
        assert_eq!(a.value(), Decimal::new(4990, 2));
    }

    #[tokio::test]
    async fn get_after_create_returns_identical_record() {
        let svc = service();
        let created = svc.create(record("Lamp", 1500)).await.unwrap();
        assert_eq!(svc.get(created.id()).await.unwrap(), created);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.get(ProductId::new()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let svc = service();
        let created = svc.create(record("Chair", 4990)).await.unwrap();

        let updated = svc.update(created.id(), record("Armchair", 8900)).await.unwrap();
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Armchair");
        assert_eq!(updated.value(), Decimal::new(8900, 2));

        let listed = svc.list().await.unwrap();
        assert_eq!(listed, vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.update(ProductId::new(), record("Ghost", 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
        assert!(svc.list().await.unwrap().is_empty());
    }

    /// Deletes the row right after handing it out, like a DELETE racing an update.
    struct DeletingAfterRead {
        inner: InMemoryProductRepository,
    }

    #[async_trait::async_trait]
    impl ProductRepository for DeletingAfterRead {
        async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
            self.inner.save(product).await
        }

        async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
            self.inner.update(product).await
        }

        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
            let found = self.inner.find_by_id(id).await?;
            self.inner.delete(id).await?;
            Ok(found)
        }

        async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn update_racing_delete_does_not_resurrect_product() {
        let repo = Arc::new(DeletingAfterRead {
            inner: InMemoryProductRepository::new(),
        });
        let svc = ProductService::new(repo.clone());
        let created = svc.create(record("Chair", 4990)).await.unwrap();

        let err = svc.update(created.id(), record("Ghost", 100)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
        assert_eq!(repo.inner.find_by_id(created.id()).await.unwrap(), None);
        assert!(repo.inner.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_product_is_gone_for_every_operation() {
        let svc = service();
        let created = svc.create(record("Chair", 4990)).await.unwrap();

        svc.delete(created.id()).await.unwrap();

        assert!(matches!(svc.get(created.id()).await, Err(ServiceError::NotFound)));
        assert!(matches!(
            svc.update(created.id(), record("Again", 1)).await,
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(svc.delete(created.id()).await, Err(ServiceError::NotFound)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_products_in_creation_order() {
        let svc = service();
        let first = svc.create(record("First", 100)).await.unwrap();
        let second = svc.create(record("Second", 200)).await.unwrap();

        let ids: Vec<ProductId> = svc.list().await.unwrap().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }
}
