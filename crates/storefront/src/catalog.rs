//! Product catalog and category filtering.
//!
//! The catalog backs the shop page's product grid and its filter buttons.
//! Filtering is pure selection; the UI layer shows and hides cards from the
//! returned set.

use asfi_core::{Price, ProductId};

use crate::cart::NewItem;

/// The pseudo-category matching every product.
pub const ALL_CATEGORY: &str = "all";

/// A product shown on the shop page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    /// Filter categories this product belongs to.
    pub categories: Vec<String>,
}

impl Product {
    /// Whether this product matches a filter category.
    #[must_use]
    pub fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORY || self.categories.iter().any(|c| c == category)
    }
}

impl From<&Product> for NewItem {
    /// The add-to-cart payload for a product.
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Select the products matching a filter category, in catalog order.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.matches_category(category))
        .collect()
}
