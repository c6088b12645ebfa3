//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// The simulated identity provider cannot fail for infrastructure reasons;
/// every variant here is a rejection before any state is mutated.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password was left empty.
    #[error("Email and password are required")]
    MissingCredentials,

    /// Password shorter than the minimum length.
    #[error("Password must be at least 6 characters")]
    WeakPassword,

    /// Structurally invalid email address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] renew_rubber_core::EmailError),

    /// No current session.
    #[error("Not authenticated")]
    NotAuthenticated,
}
