//! Shop route handlers: service listing and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use renew_rubber_core::{Product, ProductId};

use crate::filters;
use crate::routes::pages::NotFoundTemplate;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub rubber_type: Option<String>,
    pub features: Vec<String>,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            long_description: product.long_description.clone().unwrap_or_default(),
            price: product.price.format_eur(),
            image: product.image.clone(),
            category: product.category.to_string(),
            rubber_type: product.rubber_type.clone(),
            features: product.features.clone(),
            in_stock: product.in_stock,
        }
    }
}

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductView>,
    pub category: String,
    pub sort: String,
}

/// Service detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/show.html")]
pub struct ShopShowTemplate {
    pub product: ProductView,
    pub related_products: Vec<ProductView>,
}

/// Apply the listing's category filter and price sort.
fn filter_and_sort(mut products: Vec<Product>, query: &ShopQuery) -> Vec<Product> {
    if let Some(category) = query.category.as_deref()
        && category != "all"
    {
        products.retain(|p| p.category.as_str() == category);
    }

    match query.sort.as_deref() {
        Some("price-asc") => products.sort_by_key(|p| p.price),
        Some("price-desc") => {
            products.sort_by_key(|p| std::cmp::Reverse(p.price));
        }
        _ => {}
    }

    products
}

/// Display the service listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    let products = filter_and_sort(state.catalog().list_products().await, &query);

    ShopIndexTemplate {
        products: products.iter().map(ProductView::from).collect(),
        category: query.category.unwrap_or_else(|| "all".to_owned()),
        sort: query.sort.unwrap_or_else(|| "default".to_owned()),
    }
}

/// How many related services to show under the detail page.
const RELATED_LIMIT: usize = 3;

/// Display the service detail page.
///
/// An unknown id renders the not-found view with status 404 rather than an
/// error response.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let product_id = ProductId::new(id);
    let Some(product) = state.catalog().get_product(&product_id).await else {
        return (StatusCode::NOT_FOUND, NotFoundTemplate).into_response();
    };

    let related_products: Vec<ProductView> = state
        .catalog()
        .list_products()
        .await
        .iter()
        .filter(|p| p.id != product.id && p.category == product.category)
        .take(RELATED_LIMIT)
        .map(ProductView::from)
        .collect();

    ShopShowTemplate {
        product: ProductView::from(&product),
        related_products,
    }
    .into_response()
}
