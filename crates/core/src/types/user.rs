//! User domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::UserId;

/// A storefront user.
///
/// There is at most one current user per browser session. The record is
/// created by sign-up, replaced by sign-in, cleared by sign-out, and updated
/// in place by profile updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Full display name.
    pub full_name: String,
    /// Phone number, when given.
    pub phone: Option<String>,
    /// Preferred partner gym for drop-off, when chosen.
    pub preferred_gym: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serde_roundtrip() {
        let user = User {
            id: UserId::new("user_01"),
            email: Email::parse("climber@example.com").unwrap(),
            full_name: "Alex van der Berg".to_owned(),
            phone: Some("+31 6 1234 5678".to_owned()),
            preferred_gym: Some("Monk Bouldergym Amsterdam".to_owned()),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
