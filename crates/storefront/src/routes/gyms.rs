//! Gym locator route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use renew_rubber_core::GymLocation;

use crate::filters;
use crate::locator;

/// Locator query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GymsQuery {
    /// Case-insensitive name/city search.
    pub q: Option<String>,
    /// Exact region filter.
    pub region: Option<String>,
}

/// Gym display data for templates.
#[derive(Clone)]
pub struct GymView {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub region: String,
    pub phone: String,
    pub website: Option<String>,
    pub opening_hours: Option<String>,
    /// Marker position on the map panel, percent of panel size.
    pub x: f64,
    pub y: f64,
}

impl From<&GymLocation> for GymView {
    fn from(gym: &GymLocation) -> Self {
        let pos = locator::project(gym.lat, gym.lng);
        Self {
            id: gym.id.as_i32(),
            name: gym.name.clone(),
            address: gym.address.clone(),
            city: gym.city.clone(),
            region: gym.region.clone(),
            phone: gym.phone.clone(),
            website: gym.website.clone(),
            opening_hours: gym.opening_hours.clone(),
            x: pos.x,
            y: pos.y,
        }
    }
}

/// Locator page template.
#[derive(Template, WebTemplate)]
#[template(path = "gyms/index.html")]
pub struct GymsTemplate {
    pub gyms: Vec<GymView>,
    pub regions: Vec<String>,
    pub query: String,
    pub region: String,
    pub total: usize,
}

/// Display the gym locator page.
#[instrument]
pub async fn index(Query(query): Query<GymsQuery>) -> impl IntoResponse {
    let all = locator::partner_gyms();
    let filtered =
        locator::filter_gyms(&all, query.q.as_deref(), query.region.as_deref());

    GymsTemplate {
        gyms: filtered.into_iter().map(GymView::from).collect(),
        regions: locator::regions(&all),
        query: query.q.unwrap_or_default(),
        region: query.region.unwrap_or_default(),
        total: all.len(),
    }
}
