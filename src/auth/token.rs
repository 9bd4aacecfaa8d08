use rand::RngCore;

use crate::models::session::SessionToken;
use crate::stores::token_store::TokenStore;
use crate::utils::time::current_timestamp;

/// Generate an opaque session token: 32 random bytes, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Issue a fresh session for a user and record it in the store.
/// Existing sessions for the same user are untouched.
pub fn issue(store: &TokenStore, user_id: &str, ttl_secs: i64) -> SessionToken {
    let now = current_timestamp();
    let session = SessionToken {
        token: generate_token(),
        user_id: user_id.to_string(),
        created_at: now,
        expires_at: now + ttl_secs,
    };
    store.insert(session.clone());
    session
}

/// Resolve a token to its user id.
///
/// Unknown tokens yield None. Expired tokens yield None and are
/// removed from the store on the way out, so dead sessions disappear
/// after one failed check.
pub fn resolve_user_id(store: &TokenStore, token: &str) -> Option<String> {
    let session = store.get(token)?;
    if session.is_expired(current_timestamp()) {
        store.remove(token);
        return None;
    }
    Some(session.user_id)
}

/// Delete a session. Returns true if the token existed.
pub fn revoke(store: &TokenStore, token: &str) -> bool {
    store.remove(token)
}
