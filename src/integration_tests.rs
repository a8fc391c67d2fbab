#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use crate::actors::{CartDeps, CartService};
    use crate::clients::CartClient;
    use crate::domain::{Cart, CartEntry, Product, StockInfo};
    use crate::error::{CartError, CartOperation, CatalogError, OUT_OF_STOCK_MESSAGE};
    use crate::messages::InventoryRequest;
    use crate::mock_framework::{create_mock_catalog, expect_get_product, expect_get_stock};
    use crate::notify::ChannelNotifier;
    use crate::storage::{MemoryStorage, PersistentStorage};

    const KEY: &str = "@RocketShoes:cart";

    struct Fixture {
        client: CartClient,
        catalog_rx: mpsc::Receiver<InventoryRequest>,
        storage: Arc<MemoryStorage>,
        notifications: mpsc::UnboundedReceiver<String>,
    }

    fn setup(initial: Vec<CartEntry>) -> Fixture {
        let (catalog, catalog_rx) = create_mock_catalog(10);
        let storage = Arc::new(MemoryStorage::new());
        let (notifier, notifications) = ChannelNotifier::new();
        let deps = CartDeps {
            catalog: Arc::new(catalog),
            storage: storage.clone(),
            notifier: Arc::new(notifier),
        };
        let (service, client) = CartService::new(10, KEY, Cart::from_stored(initial), deps);
        tokio::spawn(service.run());
        Fixture {
            client,
            catalog_rx,
            storage,
            notifications,
        }
    }

    fn stored_entry(product_id: u64, amount: u32) -> CartEntry {
        CartEntry {
            product_id,
            title: "Sneaker".to_string(),
            price: 139.9,
            image_url: "https://cdn.example/1.jpg".to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn test_add_new_product_flow() {
        let mut fx = setup(Vec::new());

        // 1. Execute add in background
        let client = fx.client.clone();
        let add_task = tokio::spawn(async move { client.add_product(5).await });

        // 2. Stock is checked first
        let (product_id, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");
        assert_eq!(product_id, 5);
        responder.send(Ok(StockInfo::new(5, 3))).unwrap();

        // 3. Then the product is fetched, since it is not in the cart yet
        let (product_id, responder) = expect_get_product(&mut fx.catalog_rx).await.expect("Expected GetProduct");
        assert_eq!(product_id, 5);
        responder
            .send(Ok(Product::new(5, "Shoe", 99.9, "https://cdn.example/5.jpg")))
            .unwrap();

        // 4. Verify result, memory and storage
        assert_eq!(add_task.await.unwrap(), Ok(()));
        let cart = fx.client.cart();
        assert_eq!(cart.len(), 1);
        let entry = cart.get(5).unwrap();
        assert_eq!(entry.title, "Shoe");
        assert_eq!(entry.amount, 1);
        assert_eq!(fx.storage.load(KEY).await.unwrap(), Some(cart.into_entries()));
        assert!(fx.notifications.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_add_existing_product_skips_product_fetch() {
        let mut fx = setup(vec![stored_entry(1, 1)]);

        let client = fx.client.clone();
        let add_task = tokio::spawn(async move { client.add_product(1).await });

        let (_, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");
        responder.send(Ok(StockInfo::new(1, 4))).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(()));
        assert_eq!(fx.client.cart().amount_of(1), 2);
        assert!(fx.catalog_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_add_at_stock_limit_is_rejected() {
        let mut fx = setup(vec![stored_entry(1, 2)]);

        let client = fx.client.clone();
        let add_task = tokio::spawn(async move { client.add_product(1).await });

        let (_, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");
        responder.send(Ok(StockInfo::new(1, 2))).unwrap();

        assert_eq!(
            add_task.await.unwrap(),
            Err(CartError::OutOfStock {
                product_id: 1,
                requested: 3,
                available: 2
            })
        );
        assert_eq!(fx.client.cart().amount_of(1), 2);
        assert_eq!(fx.notifications.try_recv().unwrap(), OUT_OF_STOCK_MESSAGE);
        assert!(fx.storage.raw(KEY).is_none());
    }

    #[tokio::test]
    async fn test_catalog_failure_during_product_fetch_leaves_cart_unchanged() {
        let mut fx = setup(Vec::new());

        let client = fx.client.clone();
        let add_task = tokio::spawn(async move { client.add_product(8).await });

        let (_, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");
        responder.send(Ok(StockInfo::new(8, 1))).unwrap();
        let (_, responder) = expect_get_product(&mut fx.catalog_rx).await.expect("Expected GetProduct");
        responder
            .send(Err(CatalogError::Malformed("missing title".to_string())))
            .unwrap();

        assert_eq!(
            add_task.await.unwrap(),
            Err(CartError::CatalogUnavailable {
                operation: CartOperation::Add,
                source: CatalogError::Malformed("missing title".to_string()),
            })
        );
        assert!(fx.client.cart().is_empty());
        assert_eq!(fx.notifications.try_recv().unwrap(), "Error adding product");
    }

    #[tokio::test]
    async fn test_update_checks_stock_before_cart_membership() {
        let mut fx = setup(Vec::new());

        let client = fx.client.clone();
        let update_task = tokio::spawn(async move { client.update_product_amount(4, 2).await });

        let (product_id, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");
        assert_eq!(product_id, 4);
        responder.send(Ok(StockInfo::new(4, 5))).unwrap();

        assert_eq!(update_task.await.unwrap(), Err(CartError::ProductNotFound(4)));
        assert_eq!(fx.notifications.try_recv().unwrap(), "Error changing product amount");
    }

    #[tokio::test]
    async fn test_update_catalog_unreachable_reports_update_failure() {
        let mut fx = setup(vec![stored_entry(1, 1)]);

        let client = fx.client.clone();
        let update_task = tokio::spawn(async move { client.update_product_amount(1, 2).await });

        let (_, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");
        responder
            .send(Err(CatalogError::Network("connection refused".to_string())))
            .unwrap();

        assert!(matches!(
            update_task.await.unwrap(),
            Err(CartError::CatalogUnavailable {
                operation: CartOperation::Update,
                ..
            })
        ));
        assert_eq!(fx.client.cart().amount_of(1), 1);
        assert_eq!(fx.notifications.try_recv().unwrap(), "Error changing product amount");
    }

    #[tokio::test]
    async fn test_requests_queue_behind_pending_catalog_call() {
        let mut fx = setup(vec![stored_entry(1, 1)]);

        let client = fx.client.clone();
        let add_task = tokio::spawn(async move { client.add_product(1).await });
        let (_, responder) = expect_get_stock(&mut fx.catalog_rx).await.expect("Expected GetStock");

        // A removal issued while the add waits on the catalog runs after it.
        let client = fx.client.clone();
        let remove_task = tokio::spawn(async move { client.remove_product(1).await });
        tokio::task::yield_now().await;
        assert_eq!(fx.client.cart().amount_of(1), 1);

        responder.send(Ok(StockInfo::new(1, 9))).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(()));
        assert_eq!(remove_task.await.unwrap(), Ok(()));
        assert!(fx.client.cart().is_empty());
        assert_eq!(fx.storage.load(KEY).await.unwrap(), Some(Vec::new()));
    }
}
