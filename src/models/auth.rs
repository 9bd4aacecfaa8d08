use serde::{Deserialize, Serialize};

use crate::models::user::PublicUser;

/// Body of a successful register or login: token plus the account it
/// belongs to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// Body of a successful `GET /api/auth/me`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// Generic success envelope for operations that return no payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Error envelope: every non-2xx response carries one of these.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let json = serde_json::to_value(SuccessResponse::new("Logged out successfully")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Logged out successfully");
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Invalid or expired token")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid or expired token");
    }
}
