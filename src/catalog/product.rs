//! Product and category types for the static catalog

use crate::catalog::tags::TagSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storefront category a product is listed under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Clothing and wearables
    Apparel,
    /// Home and living pieces
    Home,
    /// Bags, jewelry and small goods
    Accessories,
}

impl Category {
    /// Display label matching the storefront's category strings
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apparel => "Apparel",
            Self::Home => "Home",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static catalog entry
///
/// Reference data only: products are never mutated by analysis or curation.
#[derive(Clone, Debug)]
pub struct Product {
    /// Catalog identifier
    pub id: u32,
    /// Display name
    pub name: &'static str,
    /// Price in whole currency units
    pub price: f64,
    /// Short marketing description
    pub description: &'static str,
    /// Storefront category
    pub category: Category,
    /// Units in stock
    pub stock: u32,
    /// Descriptive tag set driving curation rules
    pub tags: TagSet,
    /// Whether the product appears in the featured fallback set
    pub featured: bool,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2}, {})", self.name, self.price, self.category)
    }
}
