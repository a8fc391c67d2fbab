use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::catalog::ProductCatalog;
use crate::domain::{Product, ProductId, StockInfo};
use crate::error::CatalogError;
use crate::messages::InventoryRequest;

/// Handle to a running [`InventoryService`](crate::actors::InventoryService).
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }
}

client_method!(InventoryClient => fn check_stock(product_id: ProductId) -> StockInfo as InventoryRequest::GetStock, Error = CatalogError);
client_method!(InventoryClient => fn find_product(product_id: ProductId) -> Product as InventoryRequest::GetProduct, Error = CatalogError);
client_method!(InventoryClient => fn set_stock(product_id: ProductId, amount: u32) -> () as InventoryRequest::SetStock, Error = CatalogError);
client_shutdown!(InventoryClient, InventoryRequest, CatalogError);

#[async_trait]
impl ProductCatalog for InventoryClient {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError> {
        self.check_stock(product_id).await
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.find_product(product_id).await
    }
}
