use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use validator::ValidateEmail;
use crate::error::AppError;

pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(first_name: String, last_name: String, email: String, password_hash: String, is_admin: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name,
            last_name,
            email,
            password_hash,
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Raw input for account creation. Validated and hashed by the facade.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// Partial update; `None` leaves the column untouched.
///
/// Credentials keep key presence: `Some(None)` is an explicit `null`, which
/// still counts as an attempt to change them.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Option<String>>,
    pub password: Option<Option<String>>,
    pub is_admin: Option<bool>,
}

impl UserChanges {
    pub fn touches_credentials(&self) -> bool {
        self.email.is_some() || self.password.is_some()
    }
}

pub fn validate_name(raw: &str, field: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::validation(format!("{} cannot be empty", field)));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::validation(format!("{} must be less than {} characters", field, NAME_MAX_LEN)));
    }
    Ok(name.to_string())
}

/// Emails are compared case-insensitively, so they are stored lower-cased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_email(raw: &str) -> Result<String, AppError> {
    let email = normalize_email(raw);
    let has_dotted_domain = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
        .unwrap_or(false);

    if !has_dotted_domain || !email.validate_email() {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(email)
}

pub fn validate_password(raw: &str) -> Result<(), AppError> {
    if raw.chars().count() < PASSWORD_MIN_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters long",
            PASSWORD_MIN_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed_and_bounded() {
        assert_eq!(validate_name("  Ada ", "First name").unwrap(), "Ada");
        let err = validate_name("   ", "First name").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: First name cannot be empty");
        assert!(validate_name(&"x".repeat(50), "Last name").is_ok());
        assert!(validate_name(&"x".repeat(51), "Last name").is_err());
    }

    #[test]
    fn test_email_normalization_and_format() {
        assert_eq!(validate_email("  John.Doe@Example.COM ").unwrap(), "john.doe@example.com");
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("user@domain.").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(validate_password("abc12").is_err());
        assert!(validate_password("abc123").is_ok());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("A".into(), "B".into(), "a@b.com".into(), "$argon2id$secret".into(), false);
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["is_admin"], false);
    }

    #[test]
    fn test_touches_credentials() {
        assert!(!UserChanges { first_name: Some("A".into()), ..Default::default() }.touches_credentials());
        assert!(UserChanges { password: Some(Some("secret1".into())), ..Default::default() }.touches_credentials());
        assert!(UserChanges { email: Some(None), ..Default::default() }.touches_credentials());
        assert!(UserChanges { email: Some(Some("x@y.io".into())), ..Default::default() }.touches_credentials());
    }
}
