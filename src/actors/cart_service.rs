use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::catalog::ProductCatalog;
use crate::clients::CartClient;
use crate::domain::{Cart, CartEntry, ProductId};
use crate::error::{CartError, CartOperation};
use crate::messages::CartRequest;
use crate::notify::Notifier;
use crate::storage::PersistentStorage;

/// Collaborators injected into the cart service.
#[derive(Clone)]
pub struct CartDeps {
    pub catalog: Arc<dyn ProductCatalog>,
    pub storage: Arc<dyn PersistentStorage>,
    pub notifier: Arc<dyn Notifier>,
}

/// Actor owning the cart.
///
/// Requests are handled one at a time: each operation validates against the
/// catalog, saves the candidate cart and only then swaps it in, so callers
/// never observe a half-applied change. Failures are turned into a user
/// notification and also returned to the caller.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    cart: Cart,
    storage_key: String,
    deps: CartDeps,
    updates: watch::Sender<Cart>,
}

impl CartService {
    pub fn new(
        buffer_size: usize,
        storage_key: impl Into<String>,
        cart: Cart,
        deps: CartDeps,
    ) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (updates, observer) = watch::channel(cart.clone());
        let service = Self {
            receiver,
            cart,
            storage_key: storage_key.into(),
            deps,
            updates,
        };
        (service, CartClient::new(sender, observer))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(entries = self.cart.len(), "CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddProduct { product_id, respond_to } => {
                    let result = self.handle_add_product(product_id).await;
                    let _ = respond_to.send(self.report(CartOperation::Add, result));
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    let result = self.handle_remove_product(product_id).await;
                    let _ = respond_to.send(self.report(CartOperation::Remove, result));
                }
                CartRequest::UpdateProductAmount {
                    product_id,
                    amount,
                    respond_to,
                } => {
                    let result = self.handle_update_product_amount(product_id, amount).await;
                    let _ = respond_to.send(self.report(CartOperation::Update, result));
                }
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(Ok(self.cart.clone()));
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(skip(self))]
    async fn handle_add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Processing add_product request");

        let stock = self
            .deps
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|source| CartError::CatalogUnavailable {
                operation: CartOperation::Add,
                source,
            })?;

        let current = self.cart.amount_of(product_id);
        let requested = current.saturating_add(1);
        if current == u32::MAX || requested > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut updated = self.cart.clone();
        if !updated.set_amount(product_id, requested) {
            let product = self
                .deps
                .catalog
                .get_product(product_id)
                .await
                .map_err(|source| CartError::CatalogUnavailable {
                    operation: CartOperation::Add,
                    source,
                })?;
            updated.push(CartEntry::from_product(product));
        }

        self.commit(CartOperation::Add, updated).await?;
        info!(amount = requested, "Product added to cart");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn handle_remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Processing remove_product request");

        let mut updated = self.cart.clone();
        if updated.remove(product_id).is_none() {
            return Err(CartError::ProductNotFound(product_id));
        }

        self.commit(CartOperation::Remove, updated).await?;
        info!("Product removed from cart");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn handle_update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        debug!("Processing update_product_amount request");

        if amount <= 0 {
            debug!("Ignoring non-positive amount");
            return Ok(());
        }

        let stock = self
            .deps
            .catalog
            .get_stock(product_id)
            .await
            .map_err(|source| CartError::CatalogUnavailable {
                operation: CartOperation::Update,
                source,
            })?;

        let requested = match u32::try_from(amount) {
            Ok(requested) if requested <= stock.amount => requested,
            _ => {
                return Err(CartError::OutOfStock {
                    product_id,
                    requested: u32::try_from(amount).unwrap_or(u32::MAX),
                    available: stock.amount,
                })
            }
        };

        let mut updated = self.cart.clone();
        if !updated.set_amount(product_id, requested) {
            return Err(CartError::ProductNotFound(product_id));
        }

        self.commit(CartOperation::Update, updated).await?;
        info!("Product amount updated");
        Ok(())
    }

    /// Persists `updated` and makes it the current cart. On a failed save the
    /// current cart is left as it was.
    async fn commit(&mut self, operation: CartOperation, updated: Cart) -> Result<(), CartError> {
        self.deps
            .storage
            .save(&self.storage_key, updated.entries())
            .await
            .map_err(|source| CartError::StorageFailed { operation, source })?;

        self.cart = updated;
        self.updates.send_replace(self.cart.clone());
        Ok(())
    }

    fn report(
        &self,
        operation: CartOperation,
        result: Result<(), CartError>,
    ) -> Result<(), CartError> {
        if let Err(e) = &result {
            warn!(%operation, error = %e, "Cart operation failed");
            self.deps.notifier.error(e.user_message(operation));
        }
        result
    }
}
