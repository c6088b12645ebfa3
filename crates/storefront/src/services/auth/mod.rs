//! Simulated identity provider.
//!
//! Every operation suspends for a fixed delay to emulate a network round
//! trip, then either completes fully or rejects before any state mutation.
//! Sign-in deterministically produces the demo account re-keyed to the given
//! email; sign-up mints a fresh record with a time-derived identifier. The
//! caller owns persisting the returned record in the session.

mod error;

pub use error::AuthError;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use tracing::instrument;

use renew_rubber_core::{Email, User, UserId};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

const SIGN_IN_DELAY: Duration = Duration::from_millis(500);
const SIGN_UP_DELAY: Duration = Duration::from_millis(500);
const SIGN_OUT_DELAY: Duration = Duration::from_millis(200);
const UPDATE_PROFILE_DELAY: Duration = Duration::from_millis(300);
const RESET_PASSWORD_DELAY: Duration = Duration::from_millis(300);

/// Profile fields collected at sign-up.
#[derive(Debug, Clone)]
pub struct SignUpProfile {
    /// Full display name.
    pub full_name: String,
    /// Preferred partner gym, when chosen.
    pub preferred_gym: Option<String>,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub preferred_gym: Option<String>,
}

/// The mock identity provider.
///
/// Stateless: session persistence is handled by the route layer, so the
/// service only validates input and produces user records.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthService;

impl AuthService {
    /// Create the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sign an existing user in.
    ///
    /// # Errors
    ///
    /// Rejects when either field is empty or the email does not parse. Any
    /// password is otherwise accepted and resolves to the demo account
    /// carrying the given email.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        tokio::time::sleep(SIGN_IN_DELAY).await;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let email = Email::parse(email)?;

        Ok(User {
            email,
            ..demo_user()
        })
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Rejects when email or password is empty, the password is shorter than
    /// [`MIN_PASSWORD_LENGTH`], or the email does not parse.
    #[instrument(skip(self, password, profile))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: SignUpProfile,
    ) -> Result<User, AuthError> {
        tokio::time::sleep(SIGN_UP_DELAY).await;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword);
        }
        let email = Email::parse(email)?;

        let now = Utc::now();
        Ok(User {
            id: UserId::new(format!("user_{}", now.timestamp_millis())),
            email,
            full_name: profile.full_name,
            phone: None,
            preferred_gym: profile.preferred_gym,
            created_at: now,
        })
    }

    /// Tear down the provider-side session.
    ///
    /// Clearing the record from the browser session is the caller's job.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) {
        tokio::time::sleep(SIGN_OUT_DELAY).await;
    }

    /// Acknowledge a password reset for `email`.
    ///
    /// The simulated provider accepts any current password, so this only
    /// emulates the round trip.
    #[instrument(skip(self))]
    pub async fn reset_password(&self, email: &str) {
        tokio::time::sleep(RESET_PASSWORD_DELAY).await;
        tracing::debug!(%email, "password reset acknowledged");
    }

    /// Merge `changes` into `user` and return the updated record.
    ///
    /// The "no current session" rejection happens before this is reached,
    /// via the `RequireAuth` extractor.
    #[instrument(skip(self, user, changes))]
    pub async fn update_profile(&self, mut user: User, changes: ProfileUpdate) -> User {
        tokio::time::sleep(UPDATE_PROFILE_DELAY).await;

        if let Some(full_name) = changes.full_name {
            user.full_name = full_name;
        }
        if let Some(phone) = changes.phone {
            user.phone = Some(phone);
        }
        if let Some(gym) = changes.preferred_gym {
            user.preferred_gym = Some(gym);
        }
        user
    }
}

/// The demo account returned by every successful sign-in.
fn demo_user() -> User {
    User {
        id: UserId::new("user_01"),
        email: Email::parse("climber@example.com").expect("demo email is valid"),
        full_name: "Alex van der Berg".to_owned(),
        phone: Some("+31 6 1234 5678".to_owned()),
        preferred_gym: Some("Monk Bouldergym Amsterdam".to_owned()),
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_requires_both_fields() {
        let auth = AuthService::new();
        assert!(matches!(
            auth.sign_in("", "secret").await,
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            auth.sign_in("climber@example.com", "").await,
            Err(AuthError::MissingCredentials)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_rekeys_demo_user() {
        let auth = AuthService::new();
        let user = auth.sign_in("someone@else.nl", "whatever").await.unwrap();
        assert_eq!(user.email.as_str(), "someone@else.nl");
        assert_eq!(user.full_name, "Alex van der Berg");
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_rejects_short_password() {
        let auth = AuthService::new();
        let result = auth
            .sign_up(
                "a@b.com",
                "12345",
                SignUpProfile {
                    full_name: "X".to_owned(),
                    preferred_gym: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AuthError::WeakPassword)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_up_accepts_six_char_password() {
        let auth = AuthService::new();
        let user = auth
            .sign_up(
                "a@b.com",
                "123456",
                SignUpProfile {
                    full_name: "X".to_owned(),
                    preferred_gym: Some("Klimhal Amsterdam".to_owned()),
                },
            )
            .await
            .unwrap();
        assert_eq!(user.full_name, "X");
        assert_eq!(user.preferred_gym.as_deref(), Some("Klimhal Amsterdam"));
        assert!(user.id.as_str().starts_with("user_"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_profile_merges_fields() {
        let auth = AuthService::new();
        let user = auth.sign_in("climber@example.com", "pw").await.unwrap();
        let updated = auth
            .update_profile(
                user,
                ProfileUpdate {
                    full_name: Some("Alex Berg".to_owned()),
                    phone: None,
                    preferred_gym: None,
                },
            )
            .await;
        assert_eq!(updated.full_name, "Alex Berg");
        // Untouched fields survive the merge
        assert_eq!(updated.phone.as_deref(), Some("+31 6 1234 5678"));
    }
}
