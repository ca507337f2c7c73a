use std::sync::Arc;

use modules_portfolio::core::CatalogStore;
use modules_portfolio::{
    CatalogService, MemoryCatalogStore, Module, PortfolioError, SeedData, SqliteCatalogStore,
};

fn shuffled_builtin() -> Vec<Module> {
    let modules = SeedData::builtin().unwrap().modules;
    // 固定的亂序：4, 1, 5, 3, 2
    [3, 0, 4, 2, 1].iter().map(|i| modules[*i].clone()).collect()
}

async fn assert_sorted(store: Arc<dyn CatalogStore>) {
    store.insert_many(&shuffled_builtin()).await.unwrap();
    let service = CatalogService::new(store);

    let numbers: Vec<i64> = service
        .list_modules()
        .await
        .unwrap()
        .iter()
        .map(|m| m.module_number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sqlite_list_is_sorted_for_any_insertion_order() {
    tokio_test::block_on(async {
        let store = SqliteCatalogStore::open_in_memory().unwrap();
        assert_sorted(Arc::new(store)).await;
    });
}

#[test]
fn test_memory_list_is_sorted_for_any_insertion_order() {
    tokio_test::block_on(assert_sorted(Arc::new(MemoryCatalogStore::new())));
}

#[tokio::test]
async fn test_get_module_returns_unique_match_or_not_found() {
    let store: Arc<dyn CatalogStore> = Arc::new(SqliteCatalogStore::open_in_memory().unwrap());
    store
        .insert_many(&SeedData::builtin().unwrap().modules)
        .await
        .unwrap();
    let service = CatalogService::new(store);

    for number in 1..=5 {
        let module = service.get_module(&number.to_string()).await.unwrap();
        assert_eq!(module.module_number, number);
    }

    let module = service.get_module("3").await.unwrap();
    assert_eq!(
        module.title,
        "Module 3: Project Management and Agile Practices"
    );
    assert_eq!(module.topics.len(), 5);
    assert_eq!(module.topics[0].number, 1);
    assert_eq!(module.topics[0].title, "Project Management Tools");

    for missing in ["0", "6", "99", "-1"] {
        assert!(matches!(
            service.get_module(missing).await,
            Err(PortfolioError::NotFound)
        ));
    }
}
