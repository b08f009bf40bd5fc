//! User entity.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing one record in the user collection.
///
/// This service never mutates users; records are created and destroyed by
/// the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the database.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: UserId(1),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_serializes_with_integer_id() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_clone_equals_original() {
        let user = sample_user();
        assert_eq!(user.clone(), user);
    }
}
