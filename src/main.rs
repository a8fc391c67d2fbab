use std::sync::Arc;

use tracing::{error, info, Instrument};

use cart_store::{
    setup_tracing, CartConfig, CartDeps, CartSystem, FileStorage, HttpCatalog, InventoryClient,
    InventoryService, Product, ProductCatalog, TracingNotifier,
};

fn demo_inventory() -> Vec<(Product, u32)> {
    vec![
        (Product::new(1, "Casual sneaker", 179.9, "https://cdn.example/shoes/1.jpg"), 3),
        (Product::new(2, "Running shoe", 139.9, "https://cdn.example/shoes/2.jpg"), 5),
        (Product::new(3, "Trail boot", 219.9, "https://cdn.example/shoes/3.jpg"), 2),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = CartConfig::from_env()?;
    info!(storage_dir = %config.storage_dir.display(), "Starting cart demo");

    // Remote catalog when configured, seeded in-process inventory otherwise
    let mut inventory: Option<(InventoryClient, tokio::task::JoinHandle<()>)> = None;
    let catalog: Arc<dyn ProductCatalog> = match &config.catalog_url {
        Some(url) => {
            info!(%url, "Using remote catalog");
            Arc::new(HttpCatalog::new(url.clone(), config.catalog_timeout)?)
        }
        None => {
            info!("Using in-process inventory");
            let (service, client) = InventoryService::seeded(config.channel_buffer, demo_inventory());
            let handle = tokio::spawn(service.run());
            inventory = Some((client.clone(), handle));
            Arc::new(client)
        }
    };

    let deps = CartDeps {
        catalog,
        storage: Arc::new(FileStorage::new(&config.storage_dir)),
        notifier: Arc::new(TracingNotifier),
    };
    let system = CartSystem::start(&config, deps).await?;
    let cart = system.cart_client.clone();

    let span = tracing::info_span!("shopping");
    async {
        // Failures are already surfaced as notifications; log the outcome only
        for product_id in [2, 2, 1] {
            if let Err(e) = cart.add_product(product_id).await {
                error!(product_id, error = %e, "Add failed");
            }
        }
        if let Err(e) = cart.update_product_amount(2, 4).await {
            error!(error = %e, "Update failed");
        }
        if let Err(e) = cart.update_product_amount(1, 10).await {
            error!(error = %e, "Update failed");
        }
        if let Err(e) = cart.remove_product(3).await {
            error!(error = %e, "Remove failed");
        }
    }
    .instrument(span)
    .await;

    let snapshot = cart.get_cart().await?;
    for entry in snapshot.entries() {
        info!(
            product_id = entry.product_id,
            title = %entry.title,
            amount = entry.amount,
            line_total = entry.line_total(),
            "Cart entry"
        );
    }
    info!(items = snapshot.total_items(), subtotal = snapshot.subtotal(), "Cart ready");

    // Shutdown system gracefully
    system.shutdown().await?;
    if let Some((client, handle)) = inventory {
        client.shutdown().await?;
        handle.await?;
    }

    info!("Demo completed successfully");
    Ok(())
}
