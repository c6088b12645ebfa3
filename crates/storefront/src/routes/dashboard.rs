//! Dashboard route handlers.
//!
//! The dashboard is session-gated: the `RequireAuth` extractor redirects
//! anonymous visitors to the login page. It renders three tabs - overview,
//! orders with tracking timelines, and profile settings.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use renew_rubber_core::{Order, OrderStatus, Price, TrackingStep};

use crate::error::Result;
use crate::filters;
use crate::locator;
use crate::middleware::{RequireAuth, set_current_user};
use crate::services::auth::{MIN_PASSWORD_LENGTH, ProfileUpdate};
use crate::state::AppState;

/// How many orders the overview tab previews.
const RECENT_ORDERS: usize = 2;

// =============================================================================
// View Types
// =============================================================================

/// Order line display data.
#[derive(Clone)]
pub struct OrderItemView {
    pub product_name: String,
    pub quantity: u32,
    pub price: String,
}

/// Tracking step display data.
#[derive(Clone)]
pub struct StepView {
    pub label: String,
    pub date: String,
    pub completed: bool,
}

/// Order display data.
#[derive(Clone)]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub status: String,
    pub status_class: &'static str,
    pub total: String,
    pub pickup_gym: String,
    pub estimated_completion: String,
    pub items: Vec<OrderItemView>,
    pub timeline: Vec<StepView>,
}

const fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Received => "status-received",
        OrderStatus::InProgress => "status-in-progress",
        OrderStatus::ReadyForPickup => "status-ready",
        OrderStatus::Completed => "status-completed",
    }
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

impl From<&TrackingStep> for StepView {
    fn from(step: &TrackingStep) -> Self {
        Self {
            label: step.label.clone(),
            date: step.date.map(format_date).unwrap_or_default(),
            completed: step.completed,
        }
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            date: format_date(order.date),
            status: order.status.to_string(),
            status_class: status_class(order.status),
            total: order.total.format_eur(),
            pickup_gym: order.pickup_gym.clone(),
            estimated_completion: order
                .estimated_completion
                .map(format_date)
                .unwrap_or_default(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    price: (item.price * item.quantity).format_eur(),
                })
                .collect(),
            timeline: order.tracking_timeline.iter().map(StepView::from).collect(),
        }
    }
}

// =============================================================================
// Query & Form Types
// =============================================================================

/// Dashboard query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub saved: Option<String>,
    pub error: Option<String>,
}

/// Profile settings form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub full_name: String,
    pub phone: String,
    pub preferred_gym: String,
}

/// Password change form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

fn error_message(code: &str) -> &'static str {
    match code {
        "password_missing" => "Please fill in all password fields.",
        "password_short" => "New password must be at least 6 characters.",
        "password_mismatch" => "New passwords do not match.",
        _ => "Something went wrong. Please try again.",
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/show.html")]
pub struct DashboardTemplate {
    pub tab: String,
    pub first_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_gym: String,
    pub orders: Vec<OrderView>,
    pub recent_orders: Vec<OrderView>,
    pub open_count: usize,
    pub done_count: usize,
    pub total_spent: String,
    pub gyms: Vec<String>,
    pub saved: Option<String>,
    pub error: Option<&'static str>,
}

/// Display the dashboard.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let orders = state.orders().fetch_user_orders().await;

    let open_count = orders.iter().filter(|o| o.status.is_open()).count();
    let done_count = orders.iter().filter(|o| o.status.is_done()).count();
    let total_spent: Price = orders.iter().map(|o| o.total).sum();

    let order_views: Vec<OrderView> = orders.iter().map(OrderView::from).collect();
    let recent_orders: Vec<OrderView> =
        order_views.iter().take(RECENT_ORDERS).cloned().collect();

    let first_name = user
        .full_name
        .split_whitespace()
        .next()
        .unwrap_or("Climber")
        .to_owned();

    DashboardTemplate {
        tab: query.tab.unwrap_or_else(|| "overview".to_owned()),
        first_name,
        full_name: user.full_name.clone(),
        email: user.email.to_string(),
        phone: user.phone.clone().unwrap_or_default(),
        preferred_gym: user.preferred_gym.clone().unwrap_or_default(),
        orders: order_views,
        recent_orders,
        open_count,
        done_count,
        total_spent: total_spent.format_eur(),
        gyms: locator::partner_gyms().into_iter().map(|g| g.name).collect(),
        saved: query.saved,
        error: query.error.as_deref().map(error_message),
    }
}

/// Handle profile settings submission.
#[instrument(skip(state, session, user, form))]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Form(form): Form<ProfileForm>,
) -> Result<Response> {
    let changes = ProfileUpdate {
        full_name: Some(form.full_name).filter(|n| !n.is_empty()),
        phone: Some(form.phone).filter(|p| !p.is_empty()),
        preferred_gym: Some(form.preferred_gym).filter(|g| !g.is_empty()),
    };

    let updated = state.auth().update_profile(user, changes).await;
    set_current_user(&session, &updated).await?;

    Ok(Redirect::to("/dashboard?tab=settings&saved=profile").into_response())
}

/// Handle password change submission.
///
/// The simulated provider accepts any current password; validation is local.
#[instrument(skip(state, user, form))]
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<PasswordForm>,
) -> Response {
    if form.current_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_new_password.is_empty()
    {
        return Redirect::to("/dashboard?tab=settings&error=password_missing").into_response();
    }
    if form.new_password.len() < MIN_PASSWORD_LENGTH {
        return Redirect::to("/dashboard?tab=settings&error=password_short").into_response();
    }
    if form.new_password != form.confirm_new_password {
        return Redirect::to("/dashboard?tab=settings&error=password_mismatch").into_response();
    }

    state.auth().reset_password(user.email.as_str()).await;
    Redirect::to("/dashboard?tab=settings&saved=password").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::orders::mock_orders;

    #[test]
    fn test_overview_stats_partition_orders() {
        let orders = mock_orders();
        let open = orders.iter().filter(|o| o.status.is_open()).count();
        let done = orders.iter().filter(|o| o.status.is_done()).count();
        assert_eq!(open + done, orders.len());
        assert_eq!(open, 2);
        assert_eq!(done, 2);
    }

    #[test]
    fn test_total_spent_sums_order_totals() {
        let total: Price = mock_orders().iter().map(|o| o.total).sum();
        assert_eq!(total.cents(), 25000);
    }

    #[test]
    fn test_order_view_formats_dates_and_money() {
        let orders = mock_orders();
        let view = OrderView::from(&orders[0]);
        assert_eq!(view.id, "ORD-2024-001");
        assert_eq!(view.date, "01 Feb 2024");
        assert_eq!(view.total, "€ 45,00");
        assert_eq!(view.status_class, "status-in-progress");
        assert_eq!(view.timeline.len(), 5);
    }
}
