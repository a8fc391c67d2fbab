use tracing::{error, info, instrument};

use crate::actors::{CartDeps, CartService};
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::domain::Cart;
use crate::error::CartError;

/// Composition root for the cart.
///
/// Loads the stored cart, starts the [`CartService`] and hands out the
/// [`CartClient`] that UI code shares.
pub struct CartSystem {
    pub cart_client: CartClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Loads the cart stored under the configured key (empty when nothing
    /// was saved) and starts the service.
    #[instrument(name = "cart_system", skip_all, fields(storage_key = %config.storage_key))]
    pub async fn start(config: &CartConfig, deps: CartDeps) -> Result<Self, CartError> {
        info!("Starting cart system");

        let stored = deps
            .storage
            .load(&config.storage_key)
            .await
            .map_err(CartError::LoadFailed)?;
        let cart = Cart::from_stored(stored.unwrap_or_default());
        info!(entries = cart.len(), items = cart.total_items(), "Cart loaded");

        let (service, cart_client) =
            CartService::new(config.channel_buffer, config.storage_key.clone(), cart, deps);
        let handle = tokio::spawn(service.run());

        info!("Cart system started successfully");
        Ok(Self {
            cart_client,
            handle,
        })
    }

    /// Stops the service after the requests already queued and waits for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), CartError> {
        info!("Shutting down cart system");

        self.cart_client.shutdown().await?;
        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(CartError::ActorCommunicationError(e.to_string()));
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}
