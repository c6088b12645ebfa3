//! Order confirmation route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Path, response::IntoResponse};
use tracing::instrument;

use crate::filters;

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/success.html")]
pub struct OrderSuccessTemplate {
    pub order_id: String,
}

/// Display the order confirmation page.
///
/// The id is the confirmation handle generated at checkout; there is no
/// order record behind it to look up.
#[instrument]
pub async fn success(Path(order_id): Path<String>) -> impl IntoResponse {
    OrderSuccessTemplate { order_id }
}
