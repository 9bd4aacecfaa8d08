use crate::models::session::SessionToken;
use dashmap::DashMap;

/// In-memory collection of live session tokens, keyed by token string.
///
/// Expiry is not enforced here; callers check `expires_at` on lookup
/// and remove what has lapsed.
pub struct TokenStore {
    tokens: DashMap<String, SessionToken>,
}

impl TokenStore {
    /// Create a new TokenStore instance
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    /// Add a session token, replacing any previous session under the
    /// same token string
    pub fn insert(&self, session: SessionToken) {
        self.tokens.insert(session.token.clone(), session);
    }

    /// Get a session by token
    /// Returns a clone of the session if found
    pub fn get(&self, token: &str) -> Option<SessionToken> {
        self.tokens.get(token).map(|entry| entry.value().clone())
    }

    /// Remove a session by token
    /// Returns true if a session was removed
    pub fn remove(&self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    pub fn clear(&self) {
        self.tokens.clear();
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
