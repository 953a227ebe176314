// SPDX-License-Identifier: MIT

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Role of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Patient,
    Provider,
}

/// Portal user profile.
///
/// The password hash lives only in the store; it is never serialized
/// into API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable unique id (UUIDv4, also the document key)
    pub id: String,
    /// Email address, unique, used as the login key
    pub email: String,
    /// Display name
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    /// Privacy-policy consent, required true at registration
    pub consent: bool,
    /// When the account was created (RFC3339)
    pub created_at: String,
    /// Last profile update (RFC3339)
    pub updated_at: String,
    /// Salted PBKDF2 hash, server-side only
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

impl User {
    pub fn is_patient(&self) -> bool {
        self.role == UserRole::Patient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserRole::Patient).unwrap(),
            "\"PATIENT\""
        );
        let role: UserRole = serde_json::from_str("\"PROVIDER\"").unwrap();
        assert_eq!(role, UserRole::Provider);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            role: UserRole::Patient,
            age: None,
            gender: None,
            allergies: None,
            medications: None,
            consent: true,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            password_hash: "secret".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password_hash"));
    }
}
