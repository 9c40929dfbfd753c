use crate::cart_actor;
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::engine::CartEngine;
use crate::session::SessionStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the running cart actor.
///
/// # Startup
///
/// [`CartSystem::new`] reads the snapshot stored under `config.session_key`, builds the
/// engine from it (an empty cart if there is none or it is unreadable) and spawns the
/// actor. The returned system is ready to serve requests through
/// [`cart_client`](Self::cart_client).
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemorySessionStore::new());
/// let system = CartSystem::new(&CartConfig::default(), store);
///
/// system.cart_client.add_to_cart(product).await?;
/// let draft = system.cart_client.checkout().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the cart actor. Clone it to share the cart.
    pub cart_client: CartClient,

    handle: JoinHandle<()>,
}

impl CartSystem {
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CartConfig, store: Arc<dyn SessionStore>) -> Self {
        let engine = CartEngine::hydrate(store, config.session_key.clone());
        let (actor, cart_client) = cart_actor::new(engine, config.mailbox_capacity);
        let handle = tokio::spawn(actor.run(()));

        info!(
            key = %config.session_key,
            capacity = config.mailbox_capacity,
            "Cart system started"
        );
        Self {
            cart_client,
            handle,
        }
    }

    /// Gracefully shuts down the cart actor.
    ///
    /// Dropping the client closes the mailbox once every clone handed out has been
    /// dropped too; the actor then drains what is queued and exits.
    ///
    /// Returns `Err` if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
