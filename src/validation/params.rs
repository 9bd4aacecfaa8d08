use anyhow::{bail, Result};
use serde::Deserialize;

/// Body of `POST /api/auth/register`. Fields are optional at the wire
/// level so a missing field reports the required-fields message
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<RegisterParams> {
        match (
            non_empty(self.username),
            non_empty(self.email),
            non_empty(self.password),
        ) {
            (Some(username), Some(email), Some(password)) => Ok(RegisterParams {
                username,
                email,
                password,
            }),
            _ => bail!("Username, email, and password are required"),
        }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<LoginParams> {
        match (non_empty(self.email), non_empty(self.password)) {
            (Some(email), Some(password)) => Ok(LoginParams { email, password }),
            _ => bail!("Email and password are required"),
        }
    }
}

/// A field counts as provided only when present and non-empty.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Client-side email shape check: a local part, an `@`, and a domain
/// with an interior dot; no whitespace anywhere. The server never
/// rejects on shape, this only gates requests before they are sent.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Client-side password strength floor
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 6
}
