//! Commands accepted by the cart actor and the replies it sends back.
//!
//! Every command maps onto one [`CartEngine`](crate::engine::CartEngine) operation.
//! The handler is in [`entity`](super::entity).

use crate::model::{CartItem, OrderDraft, Product, ProductId};

/// Mutations of the cart.
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add one unit of the product.
    Add(Product),
    /// Set an item's quantity. Zero or less removes the item.
    SetQuantity { id: ProductId, quantity: i64 },
    Remove(ProductId),
    /// Empty the cart and delete the stored snapshot.
    Clear,
    /// Hand back an order draft for the current contents and clear the cart.
    Checkout,
}

/// Replies to [`CartCommand`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum CartReply {
    /// Totals after an `Add`, `SetQuantity`, `Remove` or `Clear`.
    Updated(CartSummary),
    /// Result of a `Checkout`; `None` when the cart was empty.
    CheckedOut(Option<OrderDraft>),
}

/// Totals of the cart right after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub item_count: usize,
    /// Sum of quantities.
    pub total_count: u64,
    pub total_price: f64,
}

/// Read-only copy of the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub total_count: u64,
    pub total_price: f64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
