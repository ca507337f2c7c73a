// Adapters layer: concrete catalog store backends.

pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryCatalogStore;
pub use sqlite_store::SqliteCatalogStore;
