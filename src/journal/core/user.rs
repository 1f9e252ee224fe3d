//! Signed-in user profile for the mock authentication flow.

use serde::{Deserialize, Serialize};

/// Profile of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

impl User {
    /// The fixed demo profile produced by the simulated sign-in.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "Beloved User".to_string(),
            email: "user@example.com".to_string(),
            avatar_url: "https://picsum.photos/100".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_user_fields_populated() {
        let user = User::demo();
        assert!(!user.name.is_empty());
        assert!(user.email.contains('@'));
        assert!(user.avatar_url.starts_with("https://"));
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = serde_json::to_string(&User::demo()).unwrap();
        assert!(json.contains("\"avatarUrl\""));
    }
}
