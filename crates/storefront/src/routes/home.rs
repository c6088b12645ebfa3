//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::locator;
use crate::routes::shop::ProductView;
use crate::state::AppState;

/// A step in the "how it works" explainer.
#[derive(Clone)]
pub struct HowItWorksStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// The drop-off-to-pickup explainer shown on the home page.
const HOW_IT_WORKS: [HowItWorksStep; 4] = [
    HowItWorksStep {
        title: "Drop off at your gym",
        description: "Leave your shoes in the RenewRubber box at any partner gym, or ship them to us directly.",
    },
    HowItWorksStep {
        title: "We collect weekly",
        description: "We pick up shoes from every partner gym once a week and check them into the workshop.",
    },
    HowItWorksStep {
        title: "Expert resoling",
        description: "Your shoes get fresh premium rubber, applied by craftsmen who climb themselves.",
    },
    HowItWorksStep {
        title: "Pick up and climb",
        description: "We deliver the shoes back to your gym and send you a message the moment they arrive.",
    },
];

/// Number of services featured on the home page.
const FEATURED_SERVICES: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductView>,
    pub steps: Vec<HowItWorksStep>,
    pub gym_count: usize,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = state
        .catalog()
        .list_products()
        .await
        .iter()
        .take(FEATURED_SERVICES)
        .map(ProductView::from)
        .collect();

    HomeTemplate {
        featured,
        steps: HOW_IT_WORKS.to_vec(),
        gym_count: locator::partner_gyms().len(),
    }
}
