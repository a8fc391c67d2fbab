//! Typed handles for talking to the cart and inventory actors.

#[macro_use]
mod macros;

mod cart_client;
mod inventory_client;

pub use cart_client::CartClient;
pub use inventory_client::InventoryClient;
