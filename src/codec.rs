//! Serialization of the cart for the Session Store.
//!
//! The durable snapshot is a JSON array of `{id, title, price, image, quantity}`
//! objects stored under [`CART_KEY`]. `id` is a JSON number for catalog products and
//! a JSON string for admin-authored ones.
//!
//! [`encode`] and [`decode`] are a pure pair. [`hydrate`] is the fail-open entry
//! point used at startup: a missing or unreadable snapshot yields an empty cart.

use crate::model::{CartItem, CartState, CartStateError};
use thiserror::Error;
use tracing::warn;

/// Session Store key holding the cart snapshot.
pub const CART_KEY: &str = "cart";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Malformed cart snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid cart snapshot: {0}")]
    Invalid(#[from] CartStateError),
}

pub fn encode(items: &[CartItem]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(items)?)
}

/// Parses a snapshot, rejecting anything that is not a valid cart.
pub fn decode(raw: &str) -> Result<CartState, CodecError> {
    let items: Vec<CartItem> = serde_json::from_str(raw)?;
    Ok(CartState::from_items(items)?)
}

/// Turns whatever the store returned into a cart, never failing.
pub fn hydrate(raw: Option<&str>) -> CartState {
    let Some(raw) = raw else {
        return CartState::new();
    };
    match decode(raw) {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "Discarding unreadable cart snapshot");
            CartState::new()
        }
    }
}
