//! User domain entity

use chrono::{DateTime, Utc};
use realty_shared::utils::normalize_email;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,

    /// Argon2 PHC string, never sent back to callers.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, max = 80, message = "Username must be between 1 and 80 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be between 1 and 128 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UserChanges {
    #[validate(length(min = 1, max = 80, message = "Username must be between 1 and 80 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 128, message = "Password must be between 1 and 128 characters"))]
    pub password: Option<String>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

impl NewUser {
    /// Trim the username and normalize the email before validation.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password,
        }
    }
}

impl UserChanges {
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.map(|u| u.trim().to_string()),
            email: self.email.as_deref().map(normalize_email),
            password: self.password,
        }
    }

    /// Merge the supplied fields into `user`. The plain password is not
    /// applied; callers pass the already hashed value instead.
    pub fn apply(self, user: &mut User, password_hash: Option<String>) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_validation() {
        let valid = NewUser {
            username: "joao".to_string(),
            email: "joao@example.com".to_string(),
            password: "segredo".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = NewUser {
            email: "joao-at-example".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let blank_name = NewUser {
            username: "   ".to_string(),
            ..valid
        }
        .normalized();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_normalize_email() {
        let user = NewUser {
            username: " maria ".to_string(),
            email: " Maria@Example.com".to_string(),
            password: "x".to_string(),
        }
        .normalized();
        assert_eq!(user.username, "maria");
        assert_eq!(user.email, "maria@example.com");
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut user = User::new("ana".to_string(), "ana@example.com".to_string(), "hash".to_string());
        let before = user.clone();

        UserChanges {
            username: Some("ana-maria".to_string()),
            ..Default::default()
        }
        .apply(&mut user, None);

        assert_eq!(user.username, "ana-maria");
        assert_eq!(user.email, before.email);
        assert_eq!(user.password_hash, before.password_hash);
        assert_eq!(user.created_at, before.created_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("ana".to_string(), "ana@example.com".to_string(), "hash".to_string());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ana@example.com");
    }
}
