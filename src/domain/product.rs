use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
pub type ProductId = u64;

/// Represents a product as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(alias = "image")]
    pub image_url: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image_url: image_url.into(),
        }
    }
}

/// Units of a product currently available. Always fetched fresh, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    #[serde(alias = "id")]
    pub product_id: ProductId,
    pub amount: u32,
}

impl StockInfo {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_catalog_payloads() {
        let product: Product = serde_json::from_str(
            r#"{"id": 5, "title": "Shoe", "price": 139.9, "image": "https://cdn.example/shoe.jpg"}"#,
        )
        .unwrap();
        assert_eq!(product, Product::new(5, "Shoe", 139.9, "https://cdn.example/shoe.jpg"));

        let stock: StockInfo = serde_json::from_str(r#"{"id": 5, "amount": 3}"#).unwrap();
        assert_eq!(stock, StockInfo::new(5, 3));
    }

    #[test]
    fn test_rejects_negative_stock() {
        let result = serde_json::from_str::<StockInfo>(r#"{"id": 5, "amount": -1}"#);
        assert!(result.is_err());
    }
}
