use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::inventory::{reconcile, CardFilter, Reconciliation};
use crate::models::auth::{AuthResponse, ErrorResponse, SessionResponse};
use crate::models::card::Card;
use crate::models::user::PublicUser;
use crate::validation::params::{validate_email, validate_password};

/// A logged-in session as the client holds it: the bearer token plus
/// the account snapshot from the last auth response. Serializable so
/// an embedding app can persist it across runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: PublicUser,
}

/// HTTP client for the card collection API
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create an account. Email shape and password length are checked
    /// before anything is sent.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Session> {
        if !validate_email(email) {
            bail!("Invalid email format");
        }
        if !validate_password(password) {
            bail!("Password must be at least 6 characters");
        }

        let response = self
            .client
            .post(format!("{}/api/auth/register", self.base_url))
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .context("Failed to send register request")?;

        if !response.status().is_success() {
            bail!(error_message(response, "Registration failed").await);
        }

        let body = response
            .json::<AuthResponse>()
            .await
            .context("Failed to parse register response")?;

        Ok(Session {
            token: body.token,
            user: body.user,
        })
    }

    /// Authenticate and obtain a fresh session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .context("Failed to send login request")?;

        if !response.status().is_success() {
            bail!(error_message(response, "Login failed").await);
        }

        let body = response
            .json::<AuthResponse>()
            .await
            .context("Failed to parse login response")?;

        Ok(Session {
            token: body.token,
            user: body.user,
        })
    }

    /// End a session. Consumes the session: locally it is gone no
    /// matter what the server says, and a failed revoke is only logged.
    pub async fn logout(&self, session: Session) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/api/auth/logout", self.base_url))
            .bearer_auth(&session.token)
            .send()
            .await
            .context("Failed to send logout request")?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Server-side logout failed");
        }

        Ok(())
    }

    /// Fetch the account behind a session
    pub async fn current_user(&self, session: &Session) -> Result<PublicUser> {
        let response = self
            .client
            .get(format!("{}/api/auth/me", self.base_url))
            .bearer_auth(&session.token)
            .send()
            .await
            .context("Failed to send session check request")?;

        if !response.status().is_success() {
            bail!(error_message(response, "Session check failed").await);
        }

        let body = response
            .json::<SessionResponse>()
            .await
            .context("Failed to parse session check response")?;

        Ok(body.user)
    }

    /// Revalidate a session against the server.
    ///
    /// `Ok(Some)` carries the session with a refreshed account
    /// snapshot. `Ok(None)` means the server rejected the token and
    /// the session should be discarded. `Err` means the check could
    /// not be made; the caller keeps its current session.
    pub async fn refresh(&self, session: &Session) -> Result<Option<Session>> {
        let response = self
            .client
            .get(format!("{}/api/auth/me", self.base_url))
            .bearer_auth(&session.token)
            .send()
            .await
            .context("Failed to send session refresh request")?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let body = response
            .json::<SessionResponse>()
            .await
            .context("Failed to parse session refresh response")?;

        Ok(Some(Session {
            token: session.token.clone(),
            user: body.user,
        }))
    }

    /// Fetch the full card catalog
    pub async fn fetch_cards(&self) -> Result<Vec<Card>> {
        let response = self
            .client
            .get(format!("{}/cards", self.base_url))
            .send()
            .await
            .context("Failed to send catalog request")?;

        if !response.status().is_success() {
            bail!("Catalog request returned error status: {}", response.status());
        }

        response
            .json::<Vec<Card>>()
            .await
            .context("Failed to parse catalog response")
    }

    /// Fetch a public profile by id
    pub async fn fetch_user(&self, id: &str) -> Result<PublicUser> {
        let response = self
            .client
            .get(format!("{}/users/{id}", self.base_url))
            .send()
            .await
            .context("Failed to send profile request")?;

        if !response.status().is_success() {
            bail!(error_message(response, "Profile request failed").await);
        }

        response
            .json::<PublicUser>()
            .await
            .context("Failed to parse profile response")
    }

    /// Fetch the catalog and reconcile this session's inventory
    /// against it under a display filter.
    pub async fn fetch_inventory(
        &self,
        session: &Session,
        filter: &CardFilter,
    ) -> Result<Reconciliation> {
        let cards = self.fetch_cards().await?;
        Ok(reconcile(&cards, &session.user.inventory, filter))
    }
}

/// Pull the server's message out of an error response, falling back
/// to a fixed string when the body is not the standard envelope.
async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{starter_inventory, Role};

    fn test_session() -> Session {
        Session {
            token: "ab".repeat(32),
            user: PublicUser {
                id: "507f1f77bcf86cd799439011".to_string(),
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                role: Role::User,
                inventory: starter_inventory(),
            },
        }
    }

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new("http://localhost:8000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = test_session();
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(back.token, session.token);
        assert_eq!(back.user.username, "alice");
        assert_eq!(back.user.inventory, starter_inventory());
    }

    #[tokio::test]
    async fn test_register_rejects_bad_email_before_sending() {
        // Unroutable address: a request would fail differently
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();

        let err = client
            .register("alice", "not-an-email", "hunter2")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[tokio::test]
    async fn test_register_rejects_short_password_before_sending() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();

        let err = client
            .register("alice", "alice@example.com", "12345")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
