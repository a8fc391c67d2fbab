use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clients::InventoryClient;
use crate::domain::{Product, ProductId, StockInfo};
use crate::error::CatalogError;
use crate::messages::{InventoryRequest, ServiceResponse};

/// In-process product catalog actor holding products and their stock levels.
///
/// Serves the same questions as the storefront API, for demos and for
/// sessions without a remote catalog.
pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, u32>,
}

impl InventoryService {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        Self::seeded(buffer_size, std::iter::empty())
    }

    /// Creates the service with products and their initial stock.
    pub fn seeded(
        buffer_size: usize,
        items: impl IntoIterator<Item = (Product, u32)>,
    ) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut products = HashMap::new();
        let mut stock = HashMap::new();
        for (product, amount) in items {
            stock.insert(product.id, amount);
            products.insert(product.id, product);
        }
        let service = Self {
            receiver,
            products,
            stock,
        };
        (service, InventoryClient::new(sender))
    }

    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!(products = self.products.len(), "InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::GetStock { product_id, respond_to } => {
                    self.handle_get_stock(product_id, respond_to);
                }
                InventoryRequest::GetProduct { product_id, respond_to } => {
                    self.handle_get_product(product_id, respond_to);
                }
                InventoryRequest::SetStock {
                    product_id,
                    amount,
                    respond_to,
                } => {
                    self.handle_set_stock(product_id, amount, respond_to);
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
        }

        info!("InventoryService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_stock(
        &self,
        product_id: ProductId,
        respond_to: ServiceResponse<StockInfo, CatalogError>,
    ) {
        debug!("Processing get_stock request");

        let result = match self.stock.get(&product_id) {
            Some(&amount) => {
                info!(stock_level = amount, "Stock checked");
                Ok(StockInfo::new(product_id, amount))
            }
            None => {
                error!("Product not found");
                Err(CatalogError::NotFound(product_id))
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_product(
        &self,
        product_id: ProductId,
        respond_to: ServiceResponse<Product, CatalogError>,
    ) {
        debug!("Processing get_product request");

        let result = match self.products.get(&product_id) {
            Some(product) => {
                info!(product_title = %product.title, price = %product.price, "Product found");
                Ok(product.clone())
            }
            None => {
                error!("Product not found");
                Err(CatalogError::NotFound(product_id))
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_set_stock(
        &mut self,
        product_id: ProductId,
        amount: u32,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        debug!("Processing set_stock request");

        let result = match self.stock.get_mut(&product_id) {
            Some(level) => {
                *level = amount;
                info!("Stock level updated");
                Ok(())
            }
            None => {
                error!("Product not found");
                Err(CatalogError::NotFound(product_id))
            }
        };

        let _ = respond_to.send(result);
    }
}
