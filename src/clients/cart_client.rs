use tokio::sync::{mpsc, watch};

use crate::domain::{Cart, ProductId};
use crate::error::CartError;
use crate::messages::CartRequest;

/// Handle to a running [`CartService`](crate::actors::CartService).
///
/// Cheap to clone; every clone talks to the same cart. Mutations resolve once
/// the service has validated, persisted and committed them, or reported why
/// not.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    updates: watch::Receiver<Cart>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, updates: watch::Receiver<Cart>) -> Self {
        Self { sender, updates }
    }

    /// Latest committed cart, read without a round trip to the service.
    pub fn cart(&self) -> Cart {
        self.updates.borrow().clone()
    }

    /// Observer for cart changes. The returned receiver treats the current
    /// cart as already seen, so `changed()` fires on the next commit.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        let mut receiver = self.updates.clone();
        receiver.borrow_and_update();
        receiver
    }
}

client_method!(CartClient => fn add_product(product_id: ProductId) -> () as CartRequest::AddProduct, Error = CartError);
client_method!(CartClient => fn remove_product(product_id: ProductId) -> () as CartRequest::RemoveProduct, Error = CartError);
client_method!(CartClient => fn update_product_amount(product_id: ProductId, amount: i64) -> () as CartRequest::UpdateProductAmount, Error = CartError);
client_method!(CartClient => fn get_cart() -> Cart as CartRequest::GetCart, Error = CartError);
client_shutdown!(CartClient, CartRequest, CartError);
