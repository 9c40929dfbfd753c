//! The cart engine hosted behind a [`StateActor`], so that any number of tasks can
//! share one cart while its operations stay strictly sequential.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::engine::CartEngine;
use crate::framework::StateActor;

/// Creates the cart actor around an already hydrated engine, plus its client.
///
/// `capacity` bounds the mailbox; senders wait when it is full.
pub fn new(engine: CartEngine, capacity: usize) -> (StateActor<CartEngine>, CartClient) {
    let (actor, generic_client) = StateActor::new(engine, capacity);
    (actor, CartClient::new(generic_client))
}
