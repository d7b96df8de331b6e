#![cfg(feature = "async")]

mod common;

use mtg_catalog::{AsyncCatalog, Catalog, CatalogError};
use serde_json::json;

#[tokio::test]
async fn put_and_find_through_blocking_pool() {
    let catalog = AsyncCatalog::new(Catalog::in_memory());
    catalog.put_set(common::ixalan()).await.unwrap();
    catalog.put_set(common::rivals_of_ixalan()).await.unwrap();
    catalog.put_card(common::legions_landing()).await.unwrap();

    let sets = catalog.find_sets(json!({ "block_code": "xln" })).await.unwrap();
    assert_eq!(sets.len(), 2);

    let cards = catalog.find_cards(json!({ "layout": "transform" })).await.unwrap();
    assert_eq!(cards[0].collector_number, "22a");
}

#[tokio::test]
async fn validation_errors_cross_the_task_boundary() {
    let catalog = AsyncCatalog::new(Catalog::in_memory());
    let err = catalog
        .put_card(common::without(common::lightning_bolt(), "rarity"))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
}

#[tokio::test]
async fn clones_share_one_catalog() {
    let catalog = AsyncCatalog::new(Catalog::in_memory());
    let other = catalog.clone();
    other.put_set(common::masters_25()).await.unwrap();

    let count = catalog
        .run(|c| c.store().len("Set"))
        .await
        .unwrap();
    assert_eq!(count, 1);
}
