use crate::domain::model::Module;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistent collection of [`Module`] documents keyed by `module_number`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn count(&self) -> Result<u64>;

    /// Inserts all modules or none of them.
    async fn insert_many(&self, modules: &[Module]) -> Result<()>;

    /// All modules, ascending by `module_number`.
    async fn find_all_sorted(&self) -> Result<Vec<Module>>;

    async fn find_by_number(&self, module_number: i64) -> Result<Option<Module>>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn store_backend(&self) -> &str;
    fn database_path(&self) -> &str;
    fn seed_file(&self) -> Option<&str>;
    fn seed_enabled(&self) -> bool;
    fn public_dir(&self) -> &str;
}
