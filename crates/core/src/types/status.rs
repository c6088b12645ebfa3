//! Order status.

use serde::{Deserialize, Serialize};

/// Resoling order status.
///
/// The business process moves strictly forward through these stages, which is
/// why the derived ordering matches the declaration order. Transitions are
/// not enforced here: order records are read-only fixture data, and a real
/// backend would own the transition graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Received")]
    Received,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Ready for Pickup")]
    ReadyForPickup,
    #[serde(rename = "Completed")]
    Completed,
}

impl OrderStatus {
    /// Whether the shoes are still with us (received or being resoled).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Received | Self::InProgress)
    }

    /// Whether the work is finished (ready for pickup or picked up).
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::ReadyForPickup | Self::Completed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Received => "Received",
            Self::InProgress => "In Progress",
            Self::ReadyForPickup => "Ready for Pickup",
            Self::Completed => "Completed",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Received" => Ok(Self::Received),
            "In Progress" => Ok(Self::InProgress),
            "Ready for Pickup" => Ok(Self::ReadyForPickup),
            "Completed" => Ok(Self::Completed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
