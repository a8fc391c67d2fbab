use std::fmt;

use thiserror::Error;

use crate::domain::ProductId;

/// Shown whenever a requested amount exceeds the available stock.
pub const OUT_OF_STOCK_MESSAGE: &str = "Requested amount is out of stock";

/// The cart operation an error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

impl CartOperation {
    /// Generic user-facing message for a failure of this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            CartOperation::Add => "Error adding product",
            CartOperation::Remove => "Error removing product",
            CartOperation::Update => "Error changing product amount",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Remove => write!(f, "remove"),
            CartOperation::Update => write!(f, "update"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog unreachable: {0}")]
    Network(String),
    #[error("Product not found in catalog: {0}")]
    NotFound(ProductId),
    #[error("Malformed catalog response: {0}")]
    Malformed(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),
    #[error("Stored cart is corrupt: {0}")]
    Corrupt(String),
    #[error("Could not encode cart: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("Product not in cart: {0}")]
    ProductNotFound(ProductId),
    #[error("Catalog unavailable during {operation}: {source}")]
    CatalogUnavailable {
        operation: CartOperation,
        source: CatalogError,
    },
    #[error("Could not persist cart during {operation}: {source}")]
    StorageFailed {
        operation: CartOperation,
        source: StorageError,
    },
    #[error("Could not load stored cart: {0}")]
    LoadFailed(StorageError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// Message shown to the user when `operation` fails with this error.
    pub fn user_message(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => OUT_OF_STOCK_MESSAGE,
            _ => operation.failure_message(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("No data directory available, set CART_STORAGE_DIR")]
    NoDataDir,
}
