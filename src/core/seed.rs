use crate::domain::model::Module;
use crate::domain::ports::CatalogStore;
use crate::utils::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default catalog content, embedded at build time.
const DEFAULT_SEED_JSON: &str = include_str!("../../data/modules.json");

/// A declarative set of modules to load into an empty catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub modules: Vec<Module>,
}

impl SeedData {
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(DEFAULT_SEED_JSON)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(content)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !seen.insert(module.module_number) {
                return Err(PortfolioError::ValidationError {
                    message: format!("duplicate moduleNumber {} in seed data", module.module_number),
                });
            }
            if module.title.trim().is_empty() {
                return Err(PortfolioError::ValidationError {
                    message: format!("module {} has an empty title", module.module_number),
                });
            }
            if module.topics.is_empty() {
                return Err(PortfolioError::ValidationError {
                    message: format!("module {} has no topics", module.module_number),
                });
            }
            if let Some(topic) = module.topics.iter().find(|t| t.title.trim().is_empty()) {
                return Err(PortfolioError::ValidationError {
                    message: format!(
                        "topic {} of module {} has an empty title",
                        topic.number, module.module_number
                    ),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { inserted: usize },
    Skipped { existing: u64 },
}

/// Loads seed data into the catalog only when the catalog is empty.
pub struct SeedInitializer<'a> {
    store: &'a dyn CatalogStore,
}

impl<'a> SeedInitializer<'a> {
    pub fn new(store: &'a dyn CatalogStore) -> Self {
        Self { store }
    }

    pub async fn run(&self, data: &SeedData) -> Result<SeedOutcome> {
        let existing = self.store.count().await?;
        if existing > 0 {
            tracing::info!("Catalog already holds {} modules, skipping seed", existing);
            return Ok(SeedOutcome::Skipped { existing });
        }

        tracing::debug!("Catalog is empty, inserting {} modules", data.modules.len());
        self.store.insert_many(&data.modules).await?;
        tracing::info!("✅ Modules initialized successfully ({} inserted)", data.modules.len());

        Ok(SeedOutcome::Seeded {
            inserted: data.modules.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryCatalogStore;

    #[test]
    fn test_builtin_seed_shape() {
        let data = SeedData::builtin().unwrap();
        let topic_counts: Vec<usize> = data.modules.iter().map(|m| m.topics.len()).collect();

        assert_eq!(data.modules.len(), 5);
        assert_eq!(topic_counts, vec![5, 4, 5, 5, 4]);
        assert_eq!(
            data.modules[0].title,
            "Module 1: Software Testing Fundamentals"
        );
        assert_eq!(data.modules[2].topics[0].title, "Project Management Tools");
    }

    #[test]
    fn test_rejects_duplicate_module_numbers() {
        let json = r#"{"modules": [
            {"moduleNumber": 1, "title": "A", "topics": [{"number": 1, "title": "t", "description": "d"}]},
            {"moduleNumber": 1, "title": "B", "topics": [{"number": 1, "title": "t", "description": "d"}]}
        ]}"#;

        let result = SeedData::from_json_str(json);
        assert!(matches!(result, Err(PortfolioError::ValidationError { .. })));
    }

    #[test]
    fn test_rejects_module_without_topics() {
        let json = r#"{"modules": [{"moduleNumber": 1, "title": "A", "topics": []}]}"#;
        assert!(SeedData::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = SeedData::from_json_str("{\"modules\": [");
        assert!(matches!(result, Err(PortfolioError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_second_run_is_skipped() {
        let store = MemoryCatalogStore::new();
        let data = SeedData::builtin().unwrap();
        let seeder = SeedInitializer::new(&store);

        assert_eq!(
            seeder.run(&data).await.unwrap(),
            SeedOutcome::Seeded { inserted: 5 }
        );
        assert_eq!(
            seeder.run(&data).await.unwrap(),
            SeedOutcome::Skipped { existing: 5 }
        );
        assert_eq!(store.count().await.unwrap(), 5);
    }
}
