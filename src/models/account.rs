//! Learner account models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Banned,
}

/// Subscription tier currently attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Weekly,
    Monthly,
    Annual,
}

/// A learner account. No credential fields are modeled here; identity is an
/// external concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub subscription: SubscriptionTier,
    pub last_login: String,
    /// Overall progress, 0-100
    pub progress: u8,
}

impl User {
    /// Directory search semantics: case-insensitive substring on name or email
    pub fn matches(&self, query: &str) -> bool {
        crate::utils::helpers::contains_ci(&self.name, query)
            || crate::utils::helpers::contains_ci(&self.email, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "u1".to_string(),
            name: "Jean Dupont".to_string(),
            email: "jean.d@example.com".to_string(),
            status: UserStatus::Active,
            subscription: SubscriptionTier::Monthly,
            last_login: "2023-10-25".to_string(),
            progress: 65,
        }
    }

    #[test]
    fn test_matches_name_and_email() {
        let user = sample();
        assert!(user.matches("JEAN"));
        assert!(user.matches("example.com"));
        assert!(!user.matches("curie"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(UserStatus::Banned).unwrap(),
            serde_json::json!("banned")
        );
        assert_eq!(
            serde_json::to_value(SubscriptionTier::Annual).unwrap(),
            serde_json::json!("annual")
        );
    }
}
