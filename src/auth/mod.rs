pub mod password;
pub mod token;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

/// Pull the bearer token out of an `Authorization` header.
/// Returns None when the header is missing, malformed, or empty.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token)
}
