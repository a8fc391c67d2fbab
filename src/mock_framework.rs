//! # Mock Framework
//!
//! Utilities for testing the cart against a scripted catalog.
//!
//! Use [`create_mock_catalog`] to get an [`InventoryClient`] and the receiver
//! its requests land on. Then use [`expect_get_stock`] or
//! [`expect_get_product`] to assert each call and answer it.

use tokio::sync::{mpsc, oneshot};

use crate::clients::InventoryClient;
use crate::domain::{Product, ProductId, StockInfo};
use crate::error::CatalogError;
use crate::messages::InventoryRequest;

/// Creates a catalog client whose requests are delivered to the returned
/// receiver instead of a running `InventoryService`.
///
/// The test decides what every catalog call returns, and when, so failures
/// and the order of calls can be checked deterministically.
pub fn create_mock_catalog(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetStock request
pub async fn expect_get_stock(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(ProductId, oneshot::Sender<Result<StockInfo, CatalogError>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::GetStock { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetProduct request
pub async fn expect_get_product(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(ProductId, oneshot::Sender<Result<Product, CatalogError>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::GetProduct { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCatalog;

    #[tokio::test]
    async fn test_mock_catalog() {
        let (client, mut receiver) = create_mock_catalog(10);

        let stock_task = tokio::spawn(async move { client.get_stock(3).await });

        let (product_id, responder) = expect_get_stock(&mut receiver).await.expect("Expected GetStock request");
        assert_eq!(product_id, 3);
        responder.send(Ok(StockInfo::new(3, 7))).unwrap();

        let result = stock_task.await.unwrap();
        assert_eq!(result, Ok(StockInfo::new(3, 7)));
    }
}
