//! [`ActorState`] implementation that lets the [`CartEngine`] be hosted by a
//! [`StateActor`](crate::framework::StateActor).
//!
//! Each command runs to completion, including its Session Store write, before the
//! next one is taken off the mailbox.

use super::actions::{CartCommand, CartReply, CartSnapshot, CartSummary};
use crate::engine::CartEngine;
use crate::framework::ActorState;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::info;

#[async_trait]
impl ActorState for CartEngine {
    type Command = CartCommand;
    type Reply = CartReply;
    type Snapshot = CartSnapshot;
    type Context = ();
    type Error = Infallible;

    async fn on_start(&mut self, _ctx: &()) -> Result<(), Infallible> {
        info!(key = %self.key(), items = self.items().len(), "Serving cart");
        Ok(())
    }

    async fn handle_command(
        &mut self,
        command: CartCommand,
        _ctx: &(),
    ) -> Result<CartReply, Infallible> {
        let reply = match command {
            CartCommand::Add(product) => {
                self.add(&product);
                CartReply::Updated(summary(self))
            }
            CartCommand::SetQuantity { id, quantity } => {
                self.set_quantity(&id, quantity);
                CartReply::Updated(summary(self))
            }
            CartCommand::Remove(id) => {
                self.remove(&id);
                CartReply::Updated(summary(self))
            }
            CartCommand::Clear => {
                self.clear();
                CartReply::Updated(summary(self))
            }
            CartCommand::Checkout => CartReply::CheckedOut(self.checkout()),
        };
        Ok(reply)
    }

    fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items().to_vec(),
            total_count: self.total_count(),
            total_price: self.total_price(),
        }
    }

    async fn on_stop(&mut self, _ctx: &()) {
        info!(
            items = self.items().len(),
            total_count = self.total_count(),
            "Cart closed"
        );
    }
}

fn summary(engine: &CartEngine) -> CartSummary {
    CartSummary {
        item_count: engine.items().len(),
        total_count: engine.total_count(),
        total_price: engine.total_price(),
    }
}
