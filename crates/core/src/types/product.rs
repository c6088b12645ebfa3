//! Catalog product types.
//!
//! A "product" here is a resoling or repair service. The catalog is read-only
//! fixture data; products are immutable once fetched.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// Catalog category for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Full or partial sole replacement.
    Resole,
    /// Targeted repair work (toe rand, patches).
    Repair,
}

impl ProductCategory {
    /// Stable slug used in query strings and data files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Resole => "resole",
            Self::Repair => "repair",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resoling service offered in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description shown on cards.
    pub description: String,
    /// Long description shown on the detail page.
    pub long_description: Option<String>,
    /// Price in euro cents.
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Catalog category.
    pub category: ProductCategory,
    /// Rubber compound applied by this service, when fixed.
    pub rubber_type: Option<String>,
    /// Selling points shown as a bullet list.
    pub features: Vec<String>,
    /// Whether the service is currently bookable.
    pub in_stock: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProductCategory::Resole).unwrap(),
            "\"resole\""
        );
        let parsed: ProductCategory = serde_json::from_str("\"repair\"").unwrap();
        assert_eq!(parsed, ProductCategory::Repair);
    }
}
