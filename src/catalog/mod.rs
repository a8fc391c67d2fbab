//! Product catalog seam: metadata and live stock levels.

mod http;

pub use http::HttpCatalog;

use async_trait::async_trait;

use crate::domain::{Product, ProductId, StockInfo};
use crate::error::CatalogError;

/// Source of product metadata and authoritative stock levels.
///
/// Implemented by [`HttpCatalog`] for a remote storefront API and by
/// [`InventoryClient`](crate::clients::InventoryClient) for the in-process
/// inventory actor.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError>;

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}
