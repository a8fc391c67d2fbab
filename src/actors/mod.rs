//! Actors: the cart itself and the in-process inventory it can validate against.

mod cart_service;
mod inventory_service;

pub use cart_service::{CartDeps, CartService};
pub use inventory_service::InventoryService;
