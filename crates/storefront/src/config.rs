//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the demo storefront locally.
//!
//! - `RENEWRUBBER_HOST` - Bind address (default: 127.0.0.1)
//! - `RENEWRUBBER_PORT` - Listen port (default: 3000)
//! - `RENEWRUBBER_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `COMMERCE_BACKEND_URL` - Reserved endpoint for a future commerce
//!   backend; currently unused (default: <http://localhost:9000>)
//! - `IDENTITY_BACKEND_URL` - Reserved endpoint for a future identity
//!   backend; currently unused

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Placeholder endpoints for future real backends
    pub backend: BackendConfig,
}

/// Endpoint placeholders for the real backends this storefront would talk to.
///
/// All data access is currently mocked in-process; these values are loaded
/// and carried so that wiring in a real client later is a configuration
/// change, not a code change. Nothing reads them yet.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Commerce backend (catalog, carts, orders) base URL.
    pub commerce_url: String,
    /// Identity backend (accounts, sessions) base URL.
    pub identity_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (host,
    /// port, or base URL that does not parse).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("RENEWRUBBER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RENEWRUBBER_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("RENEWRUBBER_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("RENEWRUBBER_PORT".to_string(), e.to_string())
            })?;

        let base_url = get_env_or_default("RENEWRUBBER_BASE_URL", "http://localhost:3000");
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("RENEWRUBBER_BASE_URL".to_string(), e.to_string())
        })?;

        let backend = BackendConfig::from_env();

        Ok(Self {
            host,
            port,
            base_url,
            backend,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (drives the secure flag
    /// on the session cookie).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl BackendConfig {
    fn from_env() -> Self {
        Self {
            commerce_url: get_env_or_default("COMMERCE_BACKEND_URL", "http://localhost:9000"),
            identity_url: get_env_or_default(
                "IDENTITY_BACKEND_URL",
                "https://identity.invalid",
            ),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
