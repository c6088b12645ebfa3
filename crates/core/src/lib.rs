//! RenewRubber Core - Shared domain types library.
//!
//! This crate provides the domain model shared across the RenewRubber
//! components:
//! - `storefront` - Public-facing storefront site
//! - `integration-tests` - Cross-crate test suite
//!
//! # Architecture
//!
//! The core crate contains only types and pure domain logic - no I/O, no
//! HTTP, no template rendering. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   statuses, plus the catalog/order/user/gym entity structs
//! - [`cart`] - The shopping cart container with quantity-merge semantics

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartItem};
pub use types::*;
