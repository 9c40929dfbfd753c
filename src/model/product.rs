use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Prefix carried by ids of products authored through the admin surface.
pub const ADMIN_ID_PREFIX: &str = "admin_";

/// Identifier of a product.
///
/// Catalog products use numeric ids, admin-authored products use string ids of the
/// form `admin_<docId>`. On the wire the id is either a JSON number or a JSON string.
/// `Numeric(1)` and `Text("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(u64),
    Text(String),
}

impl ProductId {
    /// Builds the id of an admin-authored product from its document id.
    pub fn admin(doc_id: impl AsRef<str>) -> Self {
        Self::Text(format!("{ADMIN_ID_PREFIX}{}", doc_id.as_ref()))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Text(id) if id.starts_with(ADMIN_ID_PREFIX))
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

/// Review summary attached to catalog products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A product record as returned by the catalog.
///
/// Only `id`, `title`, `price` and `image` matter to the cart; the rest is carried
/// for listing surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Creates a product with empty description, category, image and rating.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_wire_forms() {
        let numeric: ProductId = serde_json::from_str("101").unwrap();
        assert_eq!(numeric, ProductId::Numeric(101));

        let admin: ProductId = serde_json::from_str("\"admin_abc\"").unwrap();
        assert_eq!(admin, ProductId::admin("abc"));
        assert!(admin.is_admin());
        assert!(!numeric.is_admin());

        assert_ne!(ProductId::from(1_u64), ProductId::from("1"));
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "101");
    }

    #[test]
    fn test_catalog_record_defaults_optional_fields() {
        let raw = r#"{"id": 7, "title": "Backpack", "price": 109.95}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product, Product::new(7_u64, "Backpack", 109.95));
    }
}
