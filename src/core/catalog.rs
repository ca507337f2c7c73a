use crate::domain::model::{Module, ModuleKey};
use crate::domain::ports::CatalogStore;
use crate::utils::error::{PortfolioError, Result};
use std::sync::Arc;

/// Read-only queries over the catalog. Every call goes to the store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn list_modules(&self) -> Result<Vec<Module>> {
        self.store.find_all_sorted().await
    }

    /// Looks a module up by the raw path token.
    pub async fn get_module(&self, token: &str) -> Result<Module> {
        match ModuleKey::parse(token) {
            ModuleKey::Exact(number) => self
                .store
                .find_by_number(number)
                .await?
                .ok_or(PortfolioError::NotFound),
            ModuleKey::NoMatch => Err(PortfolioError::NotFound),
            ModuleKey::CastFailure(message) => Err(PortfolioError::store(message)),
        }
    }
}
