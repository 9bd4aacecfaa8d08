/// A login session held in the token store, keyed by its opaque token.
#[derive(Clone, Debug)]
pub struct SessionToken {
    /// 64 hex characters, 32 random bytes
    pub token: String,
    /// Id of the user the token was issued to
    pub user_id: String,
    /// Unix seconds at issue time
    pub created_at: i64,
    /// Unix seconds after which the token is invalid
    pub expires_at: i64,
}

impl SessionToken {
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }
}
