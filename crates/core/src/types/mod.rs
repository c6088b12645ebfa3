//! Core types for RenewRubber.
//!
//! This module provides type-safe wrappers for common domain concepts and the
//! entity structs for the catalog, orders, users and partner gyms.

pub mod email;
pub mod gym;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;
pub mod user;

pub use email::{Email, EmailError};
pub use gym::GymLocation;
pub use id::*;
pub use order::{Order, OrderItem, TrackingStep};
pub use price::Price;
pub use product::{Product, ProductCategory};
pub use status::OrderStatus;
pub use user::User;
