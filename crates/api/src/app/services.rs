use std::sync::Arc;

use storefront_infra::{
    config::StoreConfig,
    product_service::ProductService,
    repository::{InMemoryProductRepository, PostgresProductRepository, ProductRepository, RepositoryError},
};

/// Type-erased repository shared by every request.
pub type DynProductRepository = Arc<dyn ProductRepository>;

/// Services reachable from handlers via `Extension<Arc<AppServices>>`.
pub struct AppServices {
    products: ProductService<DynProductRepository>,
}

impl AppServices {
    pub fn new(repository: DynProductRepository) -> Self {
        Self {
            products: ProductService::new(repository),
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }

    pub fn products(&self) -> &ProductService<DynProductRepository> {
        &self.products
    }
}

/// Wire services for the configured store.
pub async fn build_services(store: &StoreConfig) -> Result<AppServices, RepositoryError> {
    match store {
        StoreConfig::InMemory => {
            tracing::info!("using in-memory product store");
            Ok(AppServices::in_memory())
        }
        StoreConfig::Postgres(pg) => {
            tracing::info!(max_connections = pg.max_connections, "using postgres product store");
            let repo = PostgresProductRepository::connect(pg).await?;
            Ok(AppServices::new(Arc::new(repo)))
        }
    }
}
