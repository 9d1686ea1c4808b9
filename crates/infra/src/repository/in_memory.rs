use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_core::ProductId;
use storefront_products::Product;

use super::r#trait::{ProductRepository, RepositoryError};

#[derive(Debug)]
struct Row {
    /// Insertion position; kept across overwrites.
    seq: u64,
    product: Product,
}

#[derive(Debug, Default)]
struct State {
    next_seq: u64,
    rows: HashMap<ProductId, Row>,
}

/// In-memory product repository.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<State>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("lock poisoned".to_string())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let id = product.id();

        if let Some(row) = state.rows.get_mut(&id) {
            row.product = product.clone();
        } else {
            let seq = state.next_seq;
            state.next_seq += 1;
            state.rows.insert(
                id,
                Row {
                    seq,
                    product: product.clone(),
                },
            );
        }

        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Option<Product>, RepositoryError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        match state.rows.get_mut(&product.id()) {
            Some(row) => {
                row.product = product.clone();
                Ok(Some(product))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().map_err(|_| poisoned())?;

        let mut rows: Vec<&Row> = state.rows.values().collect();
        rows.sort_by_key(|r| r.seq);
        Ok(rows.into_iter().map(|r| r.product.clone()).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.rows.get(&id).map(|r| r.product.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        Ok(state.rows.remove(&id).is_some())
    }
}
