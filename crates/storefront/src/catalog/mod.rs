//! Catalog client.
//!
//! The catalog is a fixed in-memory service list behind a client object that
//! emulates a remote API: each fetch suspends for a fixed delay before
//! resolving, and resolved values are cached for five minutes. Swapping in a
//! real commerce backend replaces the internals of this client without
//! touching any handler.

mod data;

pub use data::mock_products;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, instrument};

use renew_rubber_core::{Product, ProductId};

/// Simulated latency for fetching the full catalog.
const LIST_DELAY: Duration = Duration::from_millis(300);

/// Simulated latency for a single product lookup.
const GET_DELAY: Duration = Duration::from_millis(200);

/// How long fetched catalog data stays cached.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Cache key for catalog fetches.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Product(ProductId),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Box<Product>),
}

/// Client for the service catalog.
///
/// Cheaply cloneable; all clones share one cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    cache: Cache<CacheKey, CacheValue>,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new() -> Self {
        let cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner { cache }),
        }
    }

    /// Fetch the full service list.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Vec<Product> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("catalog list served from cache");
            return products;
        }

        tokio::time::sleep(LIST_DELAY).await;
        let products = data::mock_products();
        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        products
    }

    /// Look a single service up by id.
    ///
    /// Unknown ids resolve to `None`; callers render the not-found view.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &ProductId) -> Option<Product> {
        let key = CacheKey::Product(id.clone());
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!("catalog lookup served from cache");
            return Some(*product);
        }

        tokio::time::sleep(GET_DELAY).await;
        let product = data::mock_products().into_iter().find(|p| &p.id == id)?;
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Some(product)
    }
}
