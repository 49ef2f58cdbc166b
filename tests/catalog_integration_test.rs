use catalog_manager::clients::ActorClient;
use catalog_manager::config::CatalogConfig;
use catalog_manager::form::{Field, ProductForm, SubmitError};
use catalog_manager::lifecycle::CatalogSystem;
use catalog_manager::manager::ViewModel;
use catalog_manager::model::{Product, ProductDraft, ProductId, ProductPatch};
use catalog_manager::product_actor::ProductError;
use rust_decimal::Decimal;

fn config() -> CatalogConfig {
    CatalogConfig::default().without_latency()
}

/// Create, reprice and delete a product through the real actor.
#[tokio::test]
async fn test_pen_scenario_against_remote() {
    let system = CatalogSystem::new(&config());
    let client = &system.product_client;

    let pen = client
        .create_product(ProductDraft::new("Pen", Decimal::from(10), 100))
        .await
        .expect("Failed to create product");
    assert_eq!(pen.name, "Pen");
    assert_eq!(pen.price, Decimal::from(10));
    assert_eq!(pen.stock, 100);
    assert!(!pen.is_deleted);

    let listed = client.list().await.expect("Failed to list");
    assert_eq!(listed, vec![pen.clone()]);

    let updated = client
        .update_product(pen.id, ProductPatch::default().price(Decimal::from(15)))
        .await
        .expect("Failed to update");
    assert_eq!(updated.price, Decimal::from(15));
    assert_eq!(updated.stock, 100, "Unspecified fields keep their value");
    assert_eq!(updated.name, "Pen");

    let listed = client.list().await.expect("Failed to list");
    assert_eq!(listed, vec![updated]);

    let ack = client
        .soft_delete_product(pen.id)
        .await
        .expect("Failed to delete");
    assert!(ack.success);
    assert_eq!(ack.id, pen.id);

    let listed = client.list().await.expect("Failed to list");
    assert!(listed.iter().all(|p| p.id != pen.id));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_soft_delete_is_idempotent() {
    let system = CatalogSystem::new(&config());
    let client = &system.product_client;

    let keep = client
        .create_product(ProductDraft::new("Keep", Decimal::from(5), 1))
        .await
        .unwrap();
    let drop_me = client
        .create_product(ProductDraft::new("Drop", Decimal::from(5), 1))
        .await
        .unwrap();

    client.soft_delete_product(drop_me.id).await.unwrap();
    let after_first = client.list().await.unwrap();

    let again = client.soft_delete_product(drop_me.id).await.unwrap();
    assert!(again.success);
    let unknown = client.soft_delete_product(ProductId(42)).await.unwrap();
    assert_eq!(unknown.id, ProductId(42));

    assert_eq!(client.list().await.unwrap(), after_first);
    assert_eq!(after_first, vec![keep]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let system = CatalogSystem::new(&config());

    let result = system
        .product_client
        .update_product(ProductId(7), ProductPatch::default().stock(3))
        .await;
    assert_eq!(result, Err(ProductError::NotFound("product_7".to_string())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_of_deleted_product_stays_hidden() {
    let system = CatalogSystem::new(&config());
    let client = &system.product_client;

    let pen = client
        .create_product(ProductDraft::new("Pen", Decimal::from(10), 100))
        .await
        .unwrap();
    client.soft_delete_product(pen.id).await.unwrap();

    let merged = client
        .update_product(pen.id, ProductPatch::default().stock(1))
        .await
        .expect("The record still exists in the store");
    assert!(merged.is_deleted);
    assert!(client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ids_are_unique_and_increasing() {
    let system = CatalogSystem::new(&config());
    let client = &system.product_client;

    let mut ids = Vec::new();
    for i in 0..20u32 {
        let product = client
            .create_product(ProductDraft::new(format!("P{i}"), Decimal::ONE, i))
            .await
            .unwrap();
        ids.push(product.id);
    }
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    system.shutdown().await.unwrap();
}

/// A whole session through the manager: the patched cache must match a fresh list.
#[tokio::test]
async fn test_manager_cache_matches_remote() {
    let system = CatalogSystem::new(&config());
    let mut manager = system.manager();
    manager.load().await;

    for (name, price, stock) in [("Pen", "10", "100"), ("Pencil", "5", "40"), ("Eraser", "2", "0")] {
        *manager.form_mut() = ProductForm::new(name, price, stock);
        manager.submit().await.expect("Failed to submit");
    }

    let pencil = manager.cache().data().unwrap()[1].id;
    manager.begin_edit(pencil).unwrap();
    manager.form_mut().set(Field::Stock, "39");
    manager.submit().await.unwrap();

    let pen = manager.cache().data().unwrap()[0].id;
    manager.delete(pen).await.unwrap();

    let fresh = system.product_client.list().await.unwrap();
    assert_eq!(manager.cache().data(), Some(fresh.as_slice()));
    assert_eq!(fresh.len(), 2);
    assert_eq!(fresh[0].stock, 39);

    drop(manager);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_form_never_reaches_remote() {
    let system = CatalogSystem::new(&config());
    let mut manager = system.manager();
    manager.load().await;

    *manager.form_mut() = ProductForm::new("", "0", "-3");
    let result = manager.submit().await;
    match result {
        Err(SubmitError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation errors, got {other:?}"),
    }

    assert!(system.product_client.list().await.unwrap().is_empty());
    assert_eq!(manager.editor().form().stock, "-3");

    drop(manager);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeded_catalog_pages_and_searches() {
    let products: Vec<Product> = (1..=25)
        .map(|i| Product::new(ProductId(i), format!("Widget {i}"), Decimal::from(i), 1))
        .chain([Product::new(ProductId(26), "Gadget", Decimal::from(1250), 3)])
        .collect();
    let system = CatalogSystem::with_products(&config(), products).unwrap();
    let mut manager = system.manager();
    manager.load().await;

    manager.set_search("wid");
    manager.next_page();
    manager.next_page();
    let ViewModel::Ready(page) = manager.view_model() else {
        panic!("expected a ready table");
    };
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.rows.len(), 5);
    assert!(!page.can_next);

    manager.set_search("GADGET");
    let ViewModel::Ready(page) = manager.view_model() else {
        panic!("expected a ready table");
    };
    assert_eq!(page.page, 1);
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].price, "₹1,250.00");

    drop(manager);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seeding_rejects_duplicate_ids() {
    let twice = vec![
        Product::new(ProductId(1), "A", Decimal::ONE, 0),
        Product::new(ProductId(1), "B", Decimal::ONE, 0),
    ];
    assert!(CatalogSystem::with_products(&config(), twice).is_err());
}

/// Deleting the whole last page moves the stored page back, so Prev still works.
#[tokio::test]
async fn test_prev_after_last_page_emptied() {
    let products: Vec<Product> = (1..=25)
        .map(|i| Product::new(ProductId(i), format!("Item {i}"), Decimal::ONE, 1))
        .collect();
    let system = CatalogSystem::with_products(&config(), products).unwrap();
    let mut manager = system.manager();
    manager.load().await;
    manager.next_page();
    manager.next_page();

    for id in 21..=25 {
        manager.delete(ProductId(id)).await.unwrap();
    }
    let ViewModel::Ready(before) = manager.view_model() else {
        panic!("expected a ready table");
    };
    assert_eq!((before.page, before.total_pages), (2, 2));
    assert_eq!(manager.view_state().page(), 2);

    manager.prev_page();
    let ViewModel::Ready(after) = manager.view_model() else {
        panic!("expected a ready table");
    };
    assert_eq!(after.page, 1);
    assert_eq!(after.rows[0].id, ProductId(1));

    drop(manager);
    system.shutdown().await.unwrap();
}
