//! # Cart Engine
//!
//! The canonical cart: a [`CartState`] mirrored write-through to a [`SessionStore`].
//!
//! Every mutating call updates the in-memory state and then writes the new snapshot
//! (or deletes it, for [`CartEngine::clear`]) before returning. Persistence is best
//! effort: a store failure is logged and the in-memory state stays authoritative for
//! the rest of the session. No method of the engine can fail.
//!
//! The engine is synchronous and single-writer. To share one cart between tasks, host
//! it in the cart actor (see [`cart_actor`](crate::cart_actor)).

use crate::codec;
use crate::model::{CartItem, CartState, OrderDraft, Product, ProductId};
use crate::session::SessionStore;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct CartEngine {
    state: CartState,
    store: Arc<dyn SessionStore>,
    key: String,
}

impl CartEngine {
    /// Builds the engine from whatever the store holds under `key`.
    ///
    /// A missing key, an unreadable snapshot, or a failing store all yield an empty cart.
    pub fn hydrate(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = match store.get(&key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(%key, error = %e, "Session store read failed, starting with an empty cart");
                None
            }
        };
        let state = codec::hydrate(raw.as_deref());
        info!(%key, items = state.len(), total_count = state.total_count(), "Cart hydrated");
        Self { state, store, key }
    }

    /// Adds one unit of `product`. The product's display data is copied on first add.
    pub fn add(&mut self, product: &Product) {
        let quantity = self.state.add(product);
        debug!(id = %product.id, quantity, "Added to cart");
        self.persist();
    }

    /// Sets an item's quantity; zero or less removes it, an unknown id is ignored.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        let found = self.state.set_quantity(id, quantity);
        debug!(%id, quantity, found, "Set quantity");
        self.persist();
    }

    /// Removes an item; an unknown id is ignored.
    pub fn remove(&mut self, id: &ProductId) {
        let removed = self.state.remove(id);
        debug!(%id, removed, "Removed from cart");
        self.persist();
    }

    /// Empties the cart and deletes the durable snapshot.
    pub fn clear(&mut self) {
        let removed = self.state.clear();
        if let Err(e) = self.store.delete(&self.key) {
            warn!(key = %self.key, error = %e, "Failed to delete cart snapshot");
        }
        info!(removed, "Cart cleared");
    }

    /// Simulated checkout: hands back the order for the current contents and clears
    /// the cart. An empty cart yields `None` and leaves storage untouched.
    pub fn checkout(&mut self) -> Option<OrderDraft> {
        if self.state.is_empty() {
            debug!("Checkout on empty cart");
            return None;
        }
        let draft = OrderDraft::from_items(self.state.items());
        info!(lines = draft.items.len(), total = draft.total, "Checked out");
        self.clear();
        Some(draft)
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn total_count(&self) -> u64 {
        self.state.total_count()
    }

    pub fn total_price(&self) -> f64 {
        self.state.total_price()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&self) {
        let raw = match codec::encode(self.state.items()) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to encode cart snapshot");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "Failed to persist cart snapshot");
        }
    }
}

impl fmt::Debug for CartEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartEngine")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
