//! Demo: browse a small catalog, fill the cart, and check out.
//!
//! Set `CART_SESSION_DIR` to keep the cart on disk between runs.

use std::sync::Arc;
use storefront_cart::catalog::{filter_by_category, CatalogSource, StaticCatalog};
use storefront_cart::config::CartConfig;
use storefront_cart::framework::ActorClient;
use storefront_cart::lifecycle::{setup_tracing, CartSystem};
use storefront_cart::model::{format_price, Product, ProductId};
use storefront_cart::session::{FileSessionStore, InMemorySessionStore, SessionStore};
use tracing::{info, warn, Instrument};

fn demo_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        Product::new(1_u64, "Fjallraven Foldsack No. 1 Backpack", 109.95)
            .with_category("men's clothing"),
        Product::new(2_u64, "Mens Casual Premium Slim Fit T-Shirts", 22.3)
            .with_category("men's clothing"),
        Product::new(5_u64, "Solid Gold Petite Micropave", 168.0).with_category("jewelery"),
        Product::new(ProductId::admin("mug01"), "Storefront Mug", 12.5)
            .with_category("kitchen"),
    ])
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    let store: Arc<dyn SessionStore> = match &config.session_dir {
        Some(dir) => Arc::new(FileSessionStore::open(dir).map_err(|e| e.to_string())?),
        None => Arc::new(InMemorySessionStore::new()),
    };

    info!("Starting storefront cart demo");
    let system = CartSystem::new(&config, store);
    let cart = system.cart_client.clone();

    let catalog = demo_catalog();
    let products = match catalog.fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            warn!(error = %e, "Catalog unavailable");
            Vec::new()
        }
    };
    let categories = catalog.fetch_categories().await.map_err(|e| e.to_string())?;
    info!(?categories, "Catalog ready");

    let span = tracing::info_span!("shopping");
    async {
        for product in filter_by_category(&products, Some("men's clothing")) {
            cart.add_to_cart(product.clone()).await?;
        }
        if let Some(mug) = products.iter().find(|p| p.id.is_admin()) {
            cart.add_to_cart(mug.clone()).await?;
            cart.update_quantity(mug.id.clone(), 3).await?;
        }
        cart.remove_from_cart(ProductId::Numeric(2)).await?;
        Ok::<_, storefront_cart::cart_actor::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let snapshot = cart.snapshot().await.map_err(|e| e.to_string())?;
    for item in &snapshot.items {
        info!(
            id = %item.id,
            quantity = item.quantity,
            line_total = %format_price(item.line_total()),
            "Cart line"
        );
    }
    info!(
        total_count = snapshot.total_count,
        total_price = %format_price(snapshot.total_price),
        "Cart ready"
    );

    match cart.checkout().await.map_err(|e| e.to_string())? {
        Some(draft) => info!(
            lines = draft.items.len(),
            total = %format_price(draft.total),
            "Order placed"
        ),
        None => info!("Nothing to check out"),
    }

    drop(cart);
    system.shutdown().await
}
