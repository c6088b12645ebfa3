//! Authentication route handlers.
//!
//! Sign-in and sign-up run against the simulated identity provider; the
//! resulting user record is persisted in the session. Failures redirect back
//! to the form with an error code in the query string, rendered as a banner.

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

use renew_rubber_core::Email;

use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::services::auth::SignUpProfile;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Sign-up form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub preferred_gym: String,
    /// Present when the terms checkbox is ticked.
    pub terms: Option<String>,
}

/// Query parameters for error banner display.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Resolve an error code from the query string to a banner message.
fn error_message(code: &str) -> &'static str {
    match code {
        "missing" => "Please fill in all fields.",
        "missing_fields" => "Please fill in all required fields.",
        "email" => "Please enter a valid email address.",
        "password_short" => "Password must be at least 6 characters.",
        "password_mismatch" => "Passwords do not match.",
        "terms" => "You must agree to the terms and conditions.",
        "session" => "Could not start your session, please try again.",
        _ => "Something went wrong. Please try again.",
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
}

/// Sign-up page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignUpTemplate {
    pub error: Option<&'static str>,
    pub gyms: Vec<String>,
}

fn gym_names() -> Vec<String> {
    crate::locator::partner_gyms()
        .into_iter()
        .map(|g| g.name)
        .collect()
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// A visitor who is already signed in goes straight to the dashboard.
pub async fn login_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    LoginTemplate {
        error: query.error.as_deref().map(error_message),
    }
    .into_response()
}

/// Handle login form submission.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    if form.email.is_empty() || form.password.is_empty() {
        return Redirect::to("/login?error=missing").into_response();
    }
    if Email::parse(&form.email).is_err() {
        return Redirect::to("/login?error=email").into_response();
    }

    match state.auth().sign_in(&form.email, &form.password).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/login?error=session").into_response();
            }
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Redirect::to("/login?error=failed").into_response()
        }
    }
}

// =============================================================================
// Sign-up Routes
// =============================================================================

/// Display the sign-up page.
pub async fn signup_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    SignUpTemplate {
        error: query.error.as_deref().map(error_message),
        gyms: gym_names(),
    }
    .into_response()
}

/// Handle sign-up form submission.
#[instrument(skip(state, session, form))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignUpForm>,
) -> Response {
    if form.full_name.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Redirect::to("/signup?error=missing_fields").into_response();
    }
    if Email::parse(&form.email).is_err() {
        return Redirect::to("/signup?error=email").into_response();
    }
    if form.password.len() < crate::services::auth::MIN_PASSWORD_LENGTH {
        return Redirect::to("/signup?error=password_short").into_response();
    }
    if form.password != form.confirm_password {
        return Redirect::to("/signup?error=password_mismatch").into_response();
    }
    if form.terms.is_none() {
        return Redirect::to("/signup?error=terms").into_response();
    }

    let profile = SignUpProfile {
        full_name: form.full_name,
        preferred_gym: Some(form.preferred_gym).filter(|g| !g.is_empty()),
    };

    match state.auth().sign_up(&form.email, &form.password, profile).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &user).await {
                tracing::error!("Failed to set session: {e}");
                return Redirect::to("/signup?error=session").into_response();
            }
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            tracing::warn!("Sign up failed: {e}");
            Redirect::to("/signup?error=failed").into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the user record from the session; the cart is left in place so a
/// signed-out visitor keeps their selection.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Response {
    state.auth().sign_out().await;

    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {e}");
    }

    Redirect::to("/").into_response()
}
