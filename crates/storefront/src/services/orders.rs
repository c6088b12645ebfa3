//! Orders client.
//!
//! Orders are read-only fixture data served after a simulated backend round
//! trip. There is no write path: checkout only produces a confirmation id,
//! and a real backend would own order creation and lifecycle.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::instrument;

use renew_rubber_core::{Order, OrderId, OrderItem, OrderStatus, Price, TrackingStep};

/// Simulated latency for fetching the order history.
const FETCH_DELAY: Duration = Duration::from_millis(400);

/// Client for the current user's resoling orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersClient;

impl OrdersClient {
    /// Create the client.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fetch the current user's orders, newest first.
    #[instrument(skip(self))]
    pub async fn fetch_user_orders(&self) -> Vec<Order> {
        tokio::time::sleep(FETCH_DELAY).await;
        mock_orders()
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn step(label: &str, date: Option<NaiveDate>, completed: bool) -> TrackingStep {
    TrackingStep {
        label: label.to_owned(),
        date,
        completed,
    }
}

/// The fixture order history.
#[must_use]
pub fn mock_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-2024-001"),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default(),
            items: vec![OrderItem {
                id: "item_01".to_owned(),
                product_name: "Vibram XS Edge Resole".to_owned(),
                quantity: 1,
                price: Price::from_cents(4500),
                image: None,
            }],
            status: OrderStatus::InProgress,
            total: Price::from_cents(4500),
            pickup_gym: "Monk Bouldergym Amsterdam".to_owned(),
            estimated_completion: date(2024, 2, 15),
            tracking_timeline: vec![
                step("Order Received", date(2024, 2, 1), true),
                step("Shoes Collected from Gym", date(2024, 2, 3), true),
                step("Resoling In Progress", date(2024, 2, 5), true),
                step("Quality Check", None, false),
                step("Ready for Pickup", None, false),
            ],
        },
        Order {
            id: OrderId::new("ORD-2024-002"),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            items: vec![OrderItem {
                id: "item_02".to_owned(),
                product_name: "Full Resole + Toe Cap".to_owned(),
                quantity: 1,
                price: Price::from_cents(6500),
                image: None,
            }],
            status: OrderStatus::Completed,
            total: Price::from_cents(6500),
            pickup_gym: "Klimhal Amsterdam".to_owned(),
            estimated_completion: date(2024, 1, 29),
            tracking_timeline: vec![
                step("Order Received", date(2024, 1, 15), true),
                step("Shoes Collected from Gym", date(2024, 1, 17), true),
                step("Resoling In Progress", date(2024, 1, 19), true),
                step("Quality Check", date(2024, 1, 26), true),
                step("Ready for Pickup", date(2024, 1, 28), true),
            ],
        },
        Order {
            id: OrderId::new("ORD-2025-003"),
            date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap_or_default(),
            items: vec![
                OrderItem {
                    id: "item_03".to_owned(),
                    product_name: "Vibram XS Grip 2 Resole".to_owned(),
                    quantity: 1,
                    price: Price::from_cents(4500),
                    image: None,
                },
                OrderItem {
                    id: "item_04".to_owned(),
                    product_name: "Toe Rand Repair".to_owned(),
                    quantity: 1,
                    price: Price::from_cents(3500),
                    image: None,
                },
            ],
            status: OrderStatus::Received,
            total: Price::from_cents(8000),
            pickup_gym: "Boulderhal Sterk - Utrecht".to_owned(),
            estimated_completion: date(2026, 1, 5),
            tracking_timeline: vec![
                step("Order Received", date(2025, 12, 20), true),
                step("Shoes Collected from Gym", None, false),
                step("Resoling In Progress", None, false),
                step("Quality Check", None, false),
                step("Ready for Pickup", None, false),
            ],
        },
        Order {
            id: OrderId::new("ORD-2025-004"),
            date: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap_or_default(),
            items: vec![OrderItem {
                id: "item_05".to_owned(),
                product_name: "Express Resole Service".to_owned(),
                quantity: 1,
                price: Price::from_cents(6000),
                image: None,
            }],
            status: OrderStatus::ReadyForPickup,
            total: Price::from_cents(6000),
            pickup_gym: "El Capitan - Den Haag".to_owned(),
            estimated_completion: date(2025, 11, 15),
            tracking_timeline: vec![
                step("Order Received", date(2025, 11, 10), true),
                step("Shoes Collected from Gym", date(2025, 11, 10), true),
                step("Resoling In Progress", date(2025, 11, 11), true),
                step("Quality Check", date(2025, 11, 14), true),
                step("Ready for Pickup", date(2025, 11, 15), true),
            ],
        },
    ]
}
