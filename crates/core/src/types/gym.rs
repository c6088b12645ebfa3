//! Partner gym reference data.

use serde::{Deserialize, Serialize};

use crate::types::id::GymId;

/// A partner climbing gym where shoes can be dropped off and picked up.
///
/// Static reference data; coordinates are WGS84 degrees used only for the
/// locator panel's bounding-box projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymLocation {
    /// Stable gym identifier.
    pub id: GymId,
    /// Gym name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Province, e.g. "Noord-Holland".
    pub region: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Phone number.
    pub phone: String,
    /// Website URL, when the gym has one.
    pub website: Option<String>,
    /// Opening hours summary, when known.
    pub opening_hours: Option<String>,
}
