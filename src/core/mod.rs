pub mod catalog;
pub mod seed;

pub use crate::domain::model::{Module, ModuleKey, Topic};
pub use crate::domain::ports::{CatalogStore, ConfigProvider};
pub use crate::utils::error::Result;
