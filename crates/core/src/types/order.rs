//! Resoling order types.
//!
//! Orders are immutable fixture data in this implementation: there is no
//! write path back to them, and a real backend would own their lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::id::OrderId;
use crate::types::price::Price;
use crate::types::status::OrderStatus;

/// A single line on an order: a snapshot of the service at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line identifier.
    pub id: String,
    /// Name of the service as sold.
    pub product_name: String,
    /// Number of pairs.
    pub quantity: u32,
    /// Unit price in euro cents at purchase time.
    pub price: Price,
    /// Image URL, when the catalog entry had one.
    pub image: Option<String>,
}

/// One step in the fulfillment timeline shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStep {
    /// Step label, e.g. "Shoes Collected from Gym".
    pub label: String,
    /// Date the step was completed, when it has been.
    pub date: Option<NaiveDate>,
    /// Whether the step is done.
    pub completed: bool,
}

/// A resoling order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, e.g. `ORD-2024-001`.
    pub id: OrderId,
    /// Date the order was placed.
    pub date: NaiveDate,
    /// Ordered line items.
    pub items: Vec<OrderItem>,
    /// Current fulfillment status.
    pub status: OrderStatus,
    /// Order total in euro cents.
    pub total: Price,
    /// Partner gym used for drop-off and pickup.
    pub pickup_gym: String,
    /// Estimated completion date, when known.
    pub estimated_completion: Option<NaiveDate>,
    /// Fulfillment timeline, oldest step first.
    pub tracking_timeline: Vec<TrackingStep>,
}
