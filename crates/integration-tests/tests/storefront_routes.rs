//! Router smoke tests: drive the assembled app, sessions included.
//!
//! Bodies are not asserted here; status codes and redirect targets are
//! enough to pin the routing surface and the auth gate.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use renew_rubber_integration_tests::test_state;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn public_pages_render() {
    for uri in ["/", "/shop", "/shop/prod_01", "/cart", "/gyms", "/about", "/contact", "/login", "/signup", "/health"] {
        let app = renew_rubber_storefront::app(test_state());
        let response = app.oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test(start_paused = true)]
async fn unknown_product_and_unknown_route_render_not_found() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app.oneshot(get("/shop/prod_99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = renew_rubber_storefront::app(test_state());
    let response = app.oneshot(get("/no/such/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn dashboard_redirects_anonymous_visitors_to_login() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app.oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/login"
    );
}

#[tokio::test(start_paused = true)]
async fn checkout_with_empty_cart_renders_empty_state_not_payment_form() {
    // GET and POST both short-circuit; neither reaches the payment form or
    // the success redirect
    let app = renew_rubber_storefront::app(test_state());
    let response = app.oneshot(get("/checkout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = renew_rubber_storefront::app(test_state());
    let response = app
        .oneshot(post_form("/checkout", "email=a%40b.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn order_confirmation_carries_the_generated_id() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app
        .oneshot(get("/order-success/ORD-1700000000000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn cart_count_fragment_is_served() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app.oneshot(get("/cart/count")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn cart_add_triggers_the_update_event() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app
        .oneshot(post_form("/cart/add", "product_id=prod_01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("HX-Trigger").unwrap(),
        "cart-updated"
    );
}

#[tokio::test(start_paused = true)]
async fn cart_add_unknown_service_is_not_found() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app
        .oneshot(post_form("/cart/add", "product_id=prod_99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn login_with_missing_fields_redirects_back_with_error() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app
        .oneshot(post_form("/login", "email=&password="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/login?error=missing"
    );
}

#[tokio::test(start_paused = true)]
async fn signup_password_rules_are_enforced_before_the_provider() {
    let app = renew_rubber_storefront::app(test_state());
    let response = app
        .oneshot(post_form(
            "/signup",
            "full_name=X&email=a%40b.com&password=12345&confirm_password=12345&terms=accepted",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/signup?error=password_short"
    );
}
