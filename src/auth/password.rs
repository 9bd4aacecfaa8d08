use anyhow::{Context, Result};

/// Hash a password with bcrypt at the configured cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).context("Failed to hash password")
}

/// Check a password against a stored bcrypt hash.
///
/// bcrypt's digest comparison is constant-time. A malformed stored
/// hash counts as a failed check, not an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps these tests fast; production cost comes from config.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_verify_accepts_correct_password() {
        let hash = hash_password("hunter2!", TEST_COST).unwrap();
        assert!(verify_password("hunter2!", &hash));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("hunter2!", TEST_COST).unwrap();
        assert!(!verify_password("hunter3!", &hash));
    }

    #[test]
    fn test_verify_rejects_near_miss() {
        let hash = hash_password("correct horse battery staple", TEST_COST).unwrap();
        assert!(!verify_password("correct horse battery stapl", &hash));
        assert!(!verify_password("correct horse battery staplee", &hash));
        assert!(!verify_password("Correct horse battery staple", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("admin123", TEST_COST).unwrap();
        let b = hash_password("admin123", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("admin123", &a));
        assert!(verify_password("admin123", &b));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }
}
