use crate::core::types::UserRole;
use serde::{Deserialize, Serialize};

/// Represents a signed-in shopper
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier for the account
    pub id: String,
    /// Email address used to sign in
    pub email: String,
    /// Optional display name
    pub name: Option<String>,
    /// Account role
    pub role: UserRole,
}

impl User {
    /// Creates a new User with the regular shopper role
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: None,
            role: UserRole::User,
        }
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the role
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Name to greet the user with, falling back to the email
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_builder() {
        let user = User::new("user-123", "ada@example.com")
            .with_name("ada")
            .with_role(UserRole::Admin);

        assert_eq!(user.display_name(), "ada");
        assert!(user.is_admin());
    }

    #[test]
    fn test_role_serialized_lowercase() {
        let user = User::new("user-123", "ada@example.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
