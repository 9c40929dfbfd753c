//! # Catalog Source
//!
//! Where the product listing comes from. The cart only ever receives [`Product`]
//! values picked from a listing; it never calls the catalog itself, so a catalog
//! outage leaves the cart fully usable.

use crate::model::Product;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The listing could not be loaded. Callers show a generic failure.
    #[error("Catalog load failed: {0}")]
    LoadFailed(String),
}

/// A read-only source of products and categories.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}

/// Catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds a catalog from a JSON array of product records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)
            .map_err(|e| CatalogError::LoadFailed(e.to_string()))?;
        info!(size = products.len(), "Catalog loaded");
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(size = self.products.len(), "Fetching products");
        Ok(self.products.clone())
    }

    /// Distinct non-empty categories in the order they first appear.
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !product.category.is_empty() && !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        debug!(size = categories.len(), "Fetching categories");
        Ok(categories)
    }
}

/// Listing filter: `None` or `""` keeps every product, anything else keeps exact
/// category matches.
pub fn filter_by_category<'a>(
    products: &'a [Product],
    category: Option<&str>,
) -> Vec<&'a Product> {
    match category {
        None | Some("") => products.iter().collect(),
        Some(category) => products
            .iter()
            .filter(|p| p.category == category)
            .collect(),
    }
}
