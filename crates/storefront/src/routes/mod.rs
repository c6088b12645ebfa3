//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page
//! GET  /health                  - Health check
//!
//! # Shop
//! GET  /shop                    - Service listing (category filter, sorting)
//! GET  /shop/{id}               - Service detail
//!
//! # Cart (HTMX fragments)
//! GET  /cart                    - Cart page
//! POST /cart/add                - Add to cart (returns count badge, triggers cart-updated)
//! POST /cart/update             - Update quantity (returns cart_items fragment)
//! POST /cart/remove             - Remove line (returns cart_items fragment)
//! GET  /cart/count              - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                - Checkout form (empty cart short-circuits)
//! POST /checkout                - Validate and place the order
//! GET  /order-success/{id}      - Order confirmation
//!
//! # Gyms
//! GET  /gyms                    - Partner gym locator (search, region filter)
//!
//! # Auth
//! GET  /login                   - Login page
//! POST /login                   - Login action
//! GET  /signup                  - Sign-up page
//! POST /signup                  - Sign-up action
//! POST /logout                  - Logout action
//!
//! # Dashboard (requires auth, redirects to /login)
//! GET  /dashboard               - Overview / orders / settings tabs
//! POST /dashboard/profile       - Update profile
//! POST /dashboard/password      - Change password (mock)
//!
//! # Pages
//! GET  /about                   - About page
//! GET  /contact                 - Contact page
//! POST /contact                 - Contact form submission
//! *                             - Not-found fallback
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod gyms;
pub mod home;
pub mod orders;
pub mod pages;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/{id}", get(shop::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
}

/// Create the dashboard routes router.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::show))
        .route("/profile", post(dashboard::update_profile))
        .route("/password", post(dashboard::change_password))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Shop routes
        .nest("/shop", shop_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .route("/order-success/{order_id}", get(orders::success))
        // Gym locator
        .route("/gyms", get(gyms::index))
        // Dashboard
        .nest("/dashboard", dashboard_routes())
        // Auth routes
        .merge(auth_routes())
        // Static pages
        .route("/about", get(pages::about))
        .route(
            "/contact",
            get(pages::contact_page).post(pages::contact_submit),
        )
        // Unknown client-side paths render the not-found view
        .fallback(pages::not_found)
}
