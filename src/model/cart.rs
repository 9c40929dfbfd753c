//! Cart contents and the pure mutations applied to them.

use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry per distinct product in the cart.
///
/// `title`, `price` and `image` are copied from the product when it is first added
/// and are never re-synced with the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "crate::model::price")]
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Reasons a sequence of items cannot form a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartStateError {
    #[error("Duplicate cart item: {0}")]
    DuplicateId(ProductId),

    #[error("Cart item {0} has zero quantity")]
    ZeroQuantity(ProductId),
}

/// The ordered cart contents.
///
/// Invariants: at most one item per product id, every item has `quantity >= 1`,
/// and items keep the order in which they were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from an already ordered sequence, rejecting sequences that break
    /// the cart invariants.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartStateError> {
        for (index, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CartStateError::ZeroQuantity(item.id.clone()));
            }
            if items[..index].iter().any(|seen| seen.id == item.id) {
                return Err(CartStateError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`, appending a new item if it is not in the cart yet.
    ///
    /// Returns the item's quantity after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => {
                self.items.push(CartItem::from_product(product));
                1
            }
        }
    }

    /// Sets the absolute quantity of an item already in the cart.
    ///
    /// A quantity of zero or less removes the item. Quantities beyond `u32::MAX`
    /// saturate. Returns `false` when the id is not in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        let Some(position) = self.position(id) else {
            return false;
        };
        if quantity <= 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        true
    }

    /// Removes an item. Returns `false` when the id is not in the cart.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Empties the cart, returning how many items were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Sum of quantities over all items.
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all items, unrounded.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

/// Renders a currency amount for display, e.g. `$10.00`.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: u64, price: f64) -> Product {
        Product::new(id, format!("Product {id}"), price)
    }

    #[test]
    fn test_add_appends_then_increments() {
        let mut cart = CartState::new();
        let widget = product(101, 10.0).with_image("https://example.com/test.jpg");

        assert_eq!(cart.add(&widget), 1);
        assert_eq!(cart.add(&widget), 2);

        assert_eq!(cart.len(), 1);
        let item = cart.get(&ProductId::Numeric(101)).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.image, "https://example.com/test.jpg");
        assert_eq!(cart.total_count(), 2);
        assert_eq!(cart.total_price(), 20.0);
    }

    #[test]
    fn test_add_keeps_first_snapshot_of_product_data() {
        let mut cart = CartState::new();
        cart.add(&product(1, 10.0));
        cart.add(&Product::new(1_u64, "Renamed", 99.0));

        let item = cart.get(&ProductId::Numeric(1)).unwrap();
        assert_eq!(item.title, "Product 1");
        assert_eq!(item.price, 10.0);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = CartState::new();
        cart.add(&product(3, 1.0));
        cart.add(&Product::new(ProductId::admin("xyz"), "Admin item", 2.0));
        cart.add(&product(1, 1.0));
        cart.add(&product(3, 1.0));

        let ids: Vec<String> = cart.items().iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "admin_xyz", "1"]);
    }

    #[test]
    fn test_set_quantity_is_absolute_and_floors_at_removal() {
        let mut cart = CartState::new();
        cart.add(&product(101, 10.0));

        assert!(cart.set_quantity(&ProductId::Numeric(101), 5));
        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.total_price(), 50.0);

        assert!(cart.set_quantity(&ProductId::Numeric(101), -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_absent_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(&product(1, 10.0));
        let before = cart.clone();

        assert!(!cart.set_quantity(&ProductId::Numeric(2), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_saturates() {
        let mut cart = CartState::new();
        cart.add(&product(1, 1.0));
        cart.set_quantity(&ProductId::Numeric(1), i64::MAX);
        assert_eq!(cart.get(&ProductId::Numeric(1)).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_remove_absent_id_is_idempotent() {
        let mut cart = CartState::new();
        cart.add(&product(1, 10.0));
        cart.add(&product(2, 5.0));
        assert_eq!(cart.total_count(), 2);
        assert_eq!(cart.total_price(), 15.0);

        assert!(cart.remove(&ProductId::Numeric(1)));
        assert_eq!(cart.total_count(), 1);
        assert_eq!(cart.total_price(), 5.0);
        assert_eq!(cart.items()[0].id, ProductId::Numeric(2));

        let before = cart.clone();
        assert!(!cart.remove(&ProductId::Numeric(999)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = CartState::new();
        cart.add(&product(1, 10.0));
        cart.add(&product(2, 5.0));

        assert_eq!(cart.clear(), 2);
        assert_eq!(cart.total_count(), 0);
        assert_eq!(cart.total_price(), 0.0);
        assert_eq!(cart.clear(), 0);
    }

    #[test]
    fn test_from_items_rejects_broken_sequences() {
        let item = |id: u64, quantity: u32| CartItem {
            id: ProductId::Numeric(id),
            title: String::new(),
            price: 1.0,
            image: String::new(),
            quantity,
        };

        assert_eq!(
            CartState::from_items(vec![item(1, 1), item(1, 2)]),
            Err(CartStateError::DuplicateId(ProductId::Numeric(1)))
        );
        assert_eq!(
            CartState::from_items(vec![item(1, 1), item(2, 0)]),
            Err(CartStateError::ZeroQuantity(ProductId::Numeric(2)))
        );
        let valid = CartState::from_items(vec![item(1, 1), item(2, 3)]).unwrap();
        assert_eq!(valid.total_count(), 4);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(0.1 + 0.2), "$0.30");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        SetQuantity(u64, i64),
        Remove(u64),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0u64..6).prop_map(Op::Add),
            3 => (0u64..6, -3i64..8).prop_map(|(id, q)| Op::SetQuantity(id, q)),
            2 => (0u64..6).prop_map(Op::Remove),
            1 => Just(Op::Clear),
        ]
    }

    fn apply(cart: &mut CartState, op: &Op) {
        match op {
            Op::Add(id) => {
                cart.add(&product(*id, 2.5));
            }
            Op::SetQuantity(id, q) => {
                cart.set_quantity(&ProductId::Numeric(*id), *q);
            }
            Op::Remove(id) => {
                cart.remove(&ProductId::Numeric(*id));
            }
            Op::Clear => {
                cart.clear();
            }
        }
    }

    proptest! {
        #[test]
        fn prop_ids_stay_unique(ids in proptest::collection::vec(0u64..10, 0..50)) {
            let mut cart = CartState::new();
            for id in &ids {
                cart.add(&product(*id, 1.0));
            }
            prop_assert!(CartState::from_items(cart.items().to_vec()).is_ok());
            prop_assert_eq!(cart.total_count(), ids.len() as u64);
        }

        #[test]
        fn prop_quantity_never_below_one(ops in proptest::collection::vec(op(), 0..60)) {
            let mut cart = CartState::new();
            for op in &ops {
                apply(&mut cart, op);
                prop_assert!(cart.items().iter().all(|item| item.quantity >= 1));
                prop_assert!(CartState::from_items(cart.items().to_vec()).is_ok());
            }
        }

        #[test]
        fn prop_non_positive_set_quantity_removes(id in 0u64..6, q in -5i64..=0) {
            let mut cart = CartState::new();
            cart.add(&product(id, 1.0));
            cart.set_quantity(&ProductId::Numeric(id), q);
            prop_assert!(cart.get(&ProductId::Numeric(id)).is_none());
        }
    }
}
