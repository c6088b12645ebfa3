//! Checkout route handlers.
//!
//! The flow is a small state machine: *editing* (form rendered, possibly
//! with field errors) -> *submitting* (the in-flight POST, which waits out
//! the simulated payment delay) -> *success* (cart cleared, redirect to the
//! confirmation page). An empty cart short-circuits to an empty-state view
//! and never renders the payment form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use renew_rubber_core::{Cart, GymLocation};

use crate::error::Result;
use crate::filters;
use crate::locator;
use crate::routes::cart::{CartView, load_cart, save_cart};
use crate::services::checkout::{
    CheckoutForm, FieldErrors, PAYMENT_PROCESSING_DELAY, generate_order_id,
};

/// Gym option for the pickup select.
#[derive(Clone)]
pub struct GymOption {
    pub name: String,
    pub city: String,
}

impl From<&GymLocation> for GymOption {
    fn from(gym: &GymLocation) -> Self {
        Self {
            name: gym.name.clone(),
            city: gym.city.clone(),
        }
    }
}

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub form: CheckoutForm,
    pub errors: FieldErrors,
    pub gyms: Vec<GymOption>,
    pub shipping: String,
    pub shipping_free: bool,
    pub total: String,
}

/// Empty-cart short-circuit template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct CheckoutEmptyTemplate;

fn pickup_gyms() -> Vec<GymOption> {
    locator::partner_gyms().iter().map(GymOption::from).collect()
}

fn render_form(cart: &Cart, form: CheckoutForm, errors: FieldErrors) -> Response {
    let shipping = form.shipping_cost();
    let total = form.order_total(cart.total_price());
    CheckoutTemplate {
        cart: CartView::from(cart),
        form,
        errors,
        gyms: pickup_gyms(),
        shipping: shipping.format_eur(),
        shipping_free: shipping.cents() == 0,
        total: total.format_eur(),
    }
    .into_response()
}

/// Display the checkout form.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return CheckoutEmptyTemplate.into_response();
    }

    render_form(&cart, CheckoutForm::default(), FieldErrors::new())
}

/// Handle checkout submission.
///
/// Validation is atomic; any failing field re-renders the form in the
/// editing state with the entered values and a field->message map. A valid
/// submission waits out the simulated payment processing, clears the cart,
/// and redirects to the confirmation page with a time-derived order id.
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Form(form): Form<CheckoutForm>) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    if cart.is_empty() {
        return Ok(CheckoutEmptyTemplate.into_response());
    }

    let errors = form.validate();
    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "checkout validation failed");
        return Ok(render_form(&cart, form, errors));
    }

    // Simulate payment processing
    tokio::time::sleep(PAYMENT_PROCESSING_DELAY).await;

    cart.clear();
    save_cart(&session, &cart).await?;

    let order_id = generate_order_id();
    tracing::info!(%order_id, "checkout completed");
    Ok(Redirect::to(&format!("/order-success/{order_id}")).into_response())
}
