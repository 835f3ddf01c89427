//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User domain entity
#[derive(Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub credential: String,
    pub created_at: DateTime<Utc>,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("credential", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            credential: "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_credential_not_serialized() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["id"], 1);
        assert!(json.get("credential").is_none());
    }

    #[test]
    fn test_debug_redacts_credential() {
        let debug = format!("{:?}", sample());
        assert!(!debug.contains("argon2id"));
        assert!(debug.contains("[REDACTED]"));
    }
}
