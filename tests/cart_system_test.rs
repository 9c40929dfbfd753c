use std::sync::Arc;
use storefront_cart::codec::{self, CART_KEY};
use storefront_cart::config::CartConfig;
use storefront_cart::framework::ActorClient;
use storefront_cart::lifecycle::CartSystem;
use storefront_cart::model::{format_price, Product, ProductId};
use storefront_cart::session::{FileSessionStore, InMemorySessionStore, SessionStore};

fn test_product() -> Product {
    Product::new(101_u64, "Test Product", 10.0)
}

/// Single product walked through add, increment, set, zero and a stray remove.
#[tokio::test]
async fn test_single_product_lifecycle() {
    let store = Arc::new(InMemorySessionStore::new());
    let system = CartSystem::new(&CartConfig::default(), store.clone());
    let cart = &system.cart_client;
    let id = ProductId::Numeric(101);

    let summary = cart.add_to_cart(test_product()).await.expect("add failed");
    assert_eq!((summary.total_count, summary.total_price), (1, 10.0));
    assert_eq!(format_price(summary.total_price), "$10.00");

    let summary = cart.add_to_cart(test_product()).await.expect("add failed");
    assert_eq!((summary.total_count, summary.total_price), (2, 20.0));
    assert_eq!(summary.item_count, 1);

    let summary = cart
        .update_quantity(id.clone(), 5)
        .await
        .expect("update failed");
    assert_eq!((summary.total_count, summary.total_price), (5, 50.0));

    let summary = cart
        .update_quantity(id.clone(), 0)
        .await
        .expect("update failed");
    assert_eq!((summary.item_count, summary.total_count), (0, 0));

    let summary = cart
        .remove_from_cart(ProductId::Numeric(999))
        .await
        .expect("remove failed");
    assert_eq!(summary.item_count, 0);

    assert_eq!(store.get(CART_KEY).unwrap().as_deref(), Some("[]"));
    system.shutdown().await.expect("shutdown failed");
}

/// Two products; removing one leaves the other untouched.
#[tokio::test]
async fn test_two_product_remove() {
    let system = CartSystem::new(
        &CartConfig::default(),
        Arc::new(InMemorySessionStore::new()),
    );
    let cart = &system.cart_client;

    cart
        .add_to_cart(Product::new(1_u64, "One", 10.0))
        .await
        .unwrap();
    let summary = cart
        .add_to_cart(Product::new(2_u64, "Two", 5.0))
        .await
        .unwrap();
    assert_eq!((summary.total_count, summary.total_price), (2, 15.0));

    let summary = cart.remove_from_cart(ProductId::Numeric(1)).await.unwrap();
    assert_eq!((summary.total_count, summary.total_price), (1, 5.0));

    let snapshot = cart.snapshot().await.unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].id, ProductId::Numeric(2));

    system.shutdown().await.unwrap();
}

/// A fresh system over the same store picks up where the last one stopped.
#[tokio::test]
async fn test_reload_restores_cart() {
    let dir = tempfile::tempdir().unwrap();
    let config = CartConfig {
        session_dir: Some(dir.path().to_path_buf()),
        ..CartConfig::default()
    };

    let store = Arc::new(FileSessionStore::open(dir.path()).unwrap());
    let first = CartSystem::new(&config, store);
    first.cart_client.add_to_cart(test_product()).await.unwrap();
    first
        .cart_client
        .add_to_cart(Product::new(ProductId::admin("d9"), "Mug", 4.5))
        .await
        .unwrap();
    first
        .cart_client
        .update_quantity(ProductId::Numeric(101), 3)
        .await
        .unwrap();
    let before = first.cart_client.snapshot().await.unwrap();
    first.shutdown().await.unwrap();

    let store = Arc::new(FileSessionStore::open(dir.path()).unwrap());
    let second = CartSystem::new(&config, store);
    let after = second.cart_client.snapshot().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(second.cart_client.total_count().await.unwrap(), 4);
    assert_eq!(second.cart_client.total_price().await.unwrap(), 34.5);
    second.shutdown().await.unwrap();
}

/// Clear zeroes the totals and removes the stored snapshot.
#[tokio::test]
async fn test_clear_removes_snapshot() {
    let store = Arc::new(InMemorySessionStore::new());
    let system = CartSystem::new(&CartConfig::default(), store.clone());

    system.cart_client.add_to_cart(test_product()).await.unwrap();
    assert!(store.get(CART_KEY).unwrap().is_some());

    let summary = system.cart_client.clear_cart().await.unwrap();
    assert_eq!((summary.total_count, summary.total_price), (0, 0.0));
    assert_eq!(store.get(CART_KEY).unwrap(), None);

    system.shutdown().await.unwrap();
}

/// Checkout hands back the order and leaves nothing behind.
#[tokio::test]
async fn test_checkout() {
    let store = Arc::new(InMemorySessionStore::new());
    let system = CartSystem::new(&CartConfig::default(), store.clone());
    let cart = &system.cart_client;

    assert_eq!(cart.checkout().await.unwrap(), None);

    cart
        .add_to_cart(Product::new(1_u64, "One", 10.0))
        .await
        .unwrap();
    cart
        .add_to_cart(Product::new(2_u64, "Two", 2.5))
        .await
        .unwrap();
    cart.update_quantity(ProductId::Numeric(2), 4).await.unwrap();

    let draft = cart.checkout().await.unwrap().expect("expected an order");
    assert_eq!(draft.total, 20.0);
    assert_eq!(draft.items[1].product_id, ProductId::Numeric(2));
    assert_eq!(draft.items[1].quantity, 4);

    assert!(cart.snapshot().await.unwrap().is_empty());
    assert_eq!(store.get(CART_KEY).unwrap(), None);
    system.shutdown().await.unwrap();
}

/// A corrupt snapshot is discarded and the cart starts empty.
#[tokio::test]
async fn test_corrupt_snapshot_starts_empty() {
    let store = Arc::new(InMemorySessionStore::new());
    store.set(CART_KEY, "[{\"id\": 1, \"title\": ").unwrap();

    let system = CartSystem::new(&CartConfig::default(), store.clone());
    assert!(system.cart_client.snapshot().await.unwrap().is_empty());

    system.cart_client.add_to_cart(test_product()).await.unwrap();
    let stored = store.get(CART_KEY).unwrap();
    assert_eq!(codec::hydrate(stored.as_deref()).total_count(), 1);
    system.shutdown().await.unwrap();
}

/// The session key comes from the config.
#[tokio::test]
async fn test_custom_session_key() {
    let store = Arc::new(InMemorySessionStore::new());
    let config = CartConfig {
        session_key: "guest-cart".to_string(),
        ..CartConfig::default()
    };
    let system = CartSystem::new(&config, store.clone());
    system.cart_client.add_to_cart(test_product()).await.unwrap();

    assert!(store.get("guest-cart").unwrap().is_some());
    assert_eq!(store.get(CART_KEY).unwrap(), None);
    system.shutdown().await.unwrap();
}
