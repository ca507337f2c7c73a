pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryCatalogStore, SqliteCatalogStore};
pub use config::PortfolioConfig;
pub use crate::core::{
    catalog::CatalogService,
    seed::{SeedData, SeedInitializer, SeedOutcome},
};
pub use domain::model::{Module, Topic};
pub use utils::error::{PortfolioError, Result};
