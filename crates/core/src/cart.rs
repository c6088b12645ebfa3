//! The shopping cart container.
//!
//! A cart holds at most one line per distinct product id, in the order the
//! products were first added. Quantities are always at least 1: setting a
//! line to zero or below removes it. Totals are derived from the line list on
//! every read, so they can never drift from it.
//!
//! The container is serde-transparent over its line list so it round-trips
//! through the session's key-value storage unchanged.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;
use crate::types::product::Product;

/// A single cart line: a product snapshot plus a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product being ordered.
    pub product: Product,
    /// Number of pairs; invariant: >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The shopping cart: an ordered list of [`CartItem`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from persisted line items.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume the cart and return its line items.
    #[must_use]
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not pairs).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of `product`.
    ///
    /// If a line for the product id already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    pub fn add_item(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|item| &item.product.id != product_id);
    }

    /// Set the quantity on the line for `product_id`.
    ///
    /// A quantity of zero or below removes the line entirely; a missing line
    /// is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of pairs across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Total price across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_price).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::product::ProductCategory;

    fn product(id: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Service {id}"),
            description: String::new(),
            long_description: None,
            price: Price::from_cents(cents),
            image: String::new(),
            category: ProductCategory::Resole,
            rubber_type: None,
            features: Vec::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_item(product("prod_01", 4500));
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_02", 4500));
        cart.add_item(product("prod_01", 3500));
        cart.add_item(product("prod_02", 4500));

        let ids: Vec<&str> = cart
            .items()
            .iter()
            .map(|i| i.product.id.as_str())
            .collect();
        assert_eq!(ids, ["prod_02", "prod_01"]);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        cart.update_quantity(&ProductId::new("prod_01"), 0);
        assert!(cart.is_empty());

        cart.add_item(product("prod_01", 4500));
        cart.update_quantity(&ProductId::new("prod_01"), -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        cart.update_quantity(&ProductId::new("prod_01"), 4);
        assert_eq!(cart.items()[0].quantity, 4);

        // Unknown id is a no-op
        cart.update_quantity(&ProductId::new("prod_99"), 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        cart.remove_item(&ProductId::new("prod_99"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals_for_mixed_cart() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        let repair = ProductId::new("prod_04");
        cart.add_item(product("prod_04", 3500));
        cart.update_quantity(&repair, 3);

        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), Price::from_cents(15000));
    }

    #[test]
    fn test_totals_track_the_line_list() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        cart.add_item(product("prod_02", 6000));
        cart.remove_item(&ProductId::new("prod_01"));

        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), Price::from_cents(6000));
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_serde_roundtrip_preserves_lines() {
        let mut cart = Cart::new();
        cart.add_item(product("prod_01", 4500));
        cart.add_item(product("prod_01", 4500));
        cart.add_item(product("prod_03", 6500));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.total_items(), 3);
    }
}
