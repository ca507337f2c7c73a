use crate::domain::model::Module;
use crate::domain::ports::CatalogStore;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;

/// In-process catalog, ordered by module number. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    modules: RwLock<BTreeMap<i64, Module>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn count(&self) -> Result<u64> {
        Ok(self.modules.read().await.len() as u64)
    }

    async fn insert_many(&self, modules: &[Module]) -> Result<()> {
        let mut guard = self.modules.write().await;

        // 先檢查重複，確保失敗時不會留下部分資料
        let mut seen = HashSet::new();
        for module in modules {
            if guard.contains_key(&module.module_number) || !seen.insert(module.module_number) {
                return Err(PortfolioError::store(format!(
                    "duplicate key: moduleNumber {}",
                    module.module_number
                )));
            }
        }

        for module in modules {
            guard.insert(module.module_number, module.clone());
        }
        Ok(())
    }

    async fn find_all_sorted(&self) -> Result<Vec<Module>> {
        Ok(self.modules.read().await.values().cloned().collect())
    }

    async fn find_by_number(&self, module_number: i64) -> Result<Option<Module>> {
        Ok(self.modules.read().await.get(&module_number).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(number: i64) -> Module {
        Module {
            module_number: number,
            title: format!("Module {}", number),
            topics: vec![],
        }
    }

    #[tokio::test]
    async fn test_rejects_duplicates_without_partial_insert() {
        let store = MemoryCatalogStore::new();
        store.insert_many(&[module(1)]).await.unwrap();

        let result = store.insert_many(&[module(2), module(1)]).await;
        assert!(result.is_err());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_is_sorted() {
        let store = MemoryCatalogStore::new();
        store
            .insert_many(&[module(3), module(1), module(2)])
            .await
            .unwrap();

        let numbers: Vec<i64> = store
            .find_all_sorted()
            .await
            .unwrap()
            .iter()
            .map(|m| m.module_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
