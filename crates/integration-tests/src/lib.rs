//! Integration tests for RenewRubber.
//!
//! Shared helpers for the test files under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use renew_rubber_storefront::config::{BackendConfig, StorefrontConfig};
use renew_rubber_storefront::state::AppState;

/// Build an application state with a fixed local configuration, bypassing
/// the environment.
#[must_use]
pub fn test_state() -> AppState {
    let config = StorefrontConfig {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 3000,
        base_url: "http://localhost:3000".to_owned(),
        backend: BackendConfig {
            commerce_url: "http://localhost:9000".to_owned(),
            identity_url: "https://identity.invalid".to_owned(),
        },
    };
    AppState::new(config)
}
