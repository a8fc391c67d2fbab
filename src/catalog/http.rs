//! Catalog client for the storefront REST API using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::ProductCatalog;
use crate::domain::{Product, ProductId, StockInfo};
use crate::error::CatalogError;

/// Reads `GET {base}/stock/{id}` and `GET {base}/products/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: Url,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: with_trailing_slash(base_url),
            client,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        product_id: ProductId,
    ) -> Result<T, CatalogError> {
        let url = self
            .base_url
            .join(&format!("{}/{}", resource, product_id))
            .map_err(|e| CatalogError::Network(format!("Invalid catalog URL: {}", e)))?;

        debug!(%url, "Sending request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(product_id)),
            status if !status.is_success() => {
                warn!(%status, "Catalog returned an error status");
                Err(CatalogError::Network(format!("Unexpected status {}", status)))
            }
            _ => response
                .json::<T>()
                .await
                .map_err(|e| CatalogError::Malformed(e.to_string())),
        }
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError> {
        let stock: StockInfo = self.fetch("stock", product_id).await?;
        if stock.product_id != product_id {
            return Err(CatalogError::Malformed(format!(
                "Stock for product {} returned for request {}",
                stock.product_id, product_id
            )));
        }
        Ok(stock)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.fetch("products", product_id).await
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
