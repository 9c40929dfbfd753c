use crate::model::{CartItem, ProductId};
use serde::{Deserialize, Serialize};

/// A line of an order, copied from a cart item at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub title: String,
    #[serde(with = "crate::model::price")]
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id.clone(),
            title: item.title.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: item.quantity,
        }
    }
}

/// The order handed back by checkout.
///
/// Storing it durably is the job of an order service outside this crate; the draft
/// carries everything such a service needs apart from the user and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    #[serde(with = "crate::model::price")]
    pub total: f64,
}

impl OrderDraft {
    pub fn from_items(items: &[CartItem]) -> Self {
        Self {
            items: items.iter().map(OrderItem::from).collect(),
            total: items.iter().map(CartItem::line_total).sum(),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
