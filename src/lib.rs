//! # cart-store
//!
//! Shopping cart state for a storefront UI: add products against live stock,
//! remove them, change amounts, and keep the cart across restarts.
//!
//! ## Layout
//!
//! - **Domain types** - [`Cart`], [`CartEntry`], [`Product`], [`StockInfo`]
//! - **Seams** - [`ProductCatalog`] for metadata and stock, [`PersistentStorage`]
//!   for the saved cart, [`Notifier`] for user-visible messages
//! - **Actors** - [`CartService`] owns the cart and handles one request at a
//!   time; [`InventoryService`] is an in-process catalog
//! - **Clients** - [`CartClient`] and [`InventoryClient`] wrap the request
//!   channels with typed, traced methods
//! - **System** - [`CartSystem`] loads the stored cart and starts the service;
//!   [`setup_tracing`] configures logging
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use cart_store::*;
//! # async fn demo(catalog: Arc<dyn ProductCatalog>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = CartConfig::from_env()?;
//! let deps = CartDeps {
//!     catalog,
//!     storage: Arc::new(FileStorage::new(&config.storage_dir)),
//!     notifier: Arc::new(TracingNotifier),
//! };
//! let system = CartSystem::start(&config, deps).await?;
//!
//! let mut updates = system.cart_client.subscribe();
//! system.cart_client.add_product(5).await?;
//! updates.changed().await?;
//! println!("{} items", updates.borrow().total_items());
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actors;
pub mod app_system;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod notify;
pub mod storage;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

pub use actors::{CartDeps, CartService, InventoryService};
pub use app_system::{setup_tracing, CartSystem};
pub use catalog::{HttpCatalog, ProductCatalog};
pub use clients::{CartClient, InventoryClient};
pub use config::CartConfig;
pub use domain::{Cart, CartEntry, Product, ProductId, StockInfo};
pub use error::{CartError, CartOperation, CatalogError, ConfigError, StorageError};
pub use notify::{ChannelNotifier, Notifier, TracingNotifier};
pub use storage::{FileStorage, MemoryStorage, PersistentStorage};
