use std::borrow::Cow;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Letters, digits and `@ . + - _`.
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.@+-]+$").expect("username pattern is valid")
});

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserInsert {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 150, message = "Ensure this field has between 1 and 150 characters."),
        regex(
            path = *USERNAME_REGEX,
            message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        )
    )]
    pub username: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,

    #[serde(default)]
    #[validate(length(max = 30, message = "Ensure this field has no more than 30 characters."))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Ensure this field has no more than 150 characters."))]
    pub last_name: String,
}

impl NewUser {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        UserInsert {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password_hash,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_login_credentials"))]
pub struct LoginUser {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

fn validate_login_credentials(login: &LoginUser) -> Result<(), ValidationError> {
    if login.email.trim().is_empty() || login.password.is_empty() {
        let mut error = ValidationError::new("missing_credentials");
        error.message = Some(Cow::Borrowed("Must include a username and password to login"));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegisterResponse {
    pub fn new(token: String, user: &User) -> Self {
        RegisterResponse {
            token,
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl LoginResponse {
    pub fn new(token: String, user: &User) -> Self {
        LoginResponse {
            token,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            last_login: user.last_login,
            date_joined: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> NewUser {
        NewUser {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "pw".into(),
            first_name: "A".into(),
            last_name: "L".into(),
        }
    }

    #[test]
    fn short_passwords_are_accepted() {
        assert!(alice().validate().is_ok());
    }

    #[test]
    fn username_rejects_spaces() {
        let mut user = alice();
        user.username = "alice smith".into();
        let errors = user.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let user: NewUser = serde_json::from_str(r#"{"username": "bob"}"#).unwrap();
        let errors = user.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn email_is_normalised_for_insert() {
        let mut user = alice();
        user.email = "  A@X.com ".into();
        let insert = user.prepare_for_insert("hash".into());
        assert_eq!(insert.email, "a@x.com");
        assert_eq!(insert.password_hash, "hash");
    }

    #[test]
    fn login_requires_both_fields() {
        let login: LoginUser = serde_json::from_str(r#"{"email": "a@x.com"}"#).unwrap();
        assert!(login.validate().is_err());

        let login = LoginUser { email: "a@x.com".into(), password: "pw".into() };
        assert!(login.validate().is_ok());
    }
}
