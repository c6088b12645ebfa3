//! Session-stored state.
//!
//! Two records live in the per-browser session store, each under an
//! app-prefixed key: the cart's line items and the current user record. Both
//! are plain serde values, so hydration on the next request is a
//! deserialization, never a migration.

/// Session keys, namespaced with the application prefix.
pub mod keys {
    /// Key for the cart's line items.
    pub const CART: &str = "renewrubber_cart";

    /// Key for the current signed-in user record.
    pub const CURRENT_USER: &str = "renewrubber_user";
}
