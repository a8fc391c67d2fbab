use tokio::sync::oneshot;

use crate::domain::{Cart, Product, ProductId, StockInfo};
use crate::error::{CartError, CatalogError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for actor communication. Each variant includes parameters
/// and a oneshot channel for responses.

#[derive(Debug)]
pub enum CartRequest {
    AddProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<(), CartError>,
    },
    RemoveProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<(), CartError>,
    },
    UpdateProductAmount {
        product_id: ProductId,
        amount: i64,
        respond_to: ServiceResponse<(), CartError>,
    },
    GetCart {
        respond_to: ServiceResponse<Cart, CartError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum InventoryRequest {
    GetStock {
        product_id: ProductId,
        respond_to: ServiceResponse<StockInfo, CatalogError>,
    },
    GetProduct {
        product_id: ProductId,
        respond_to: ServiceResponse<Product, CatalogError>,
    },
    SetStock {
        product_id: ProductId,
        amount: u32,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    Shutdown,
}
