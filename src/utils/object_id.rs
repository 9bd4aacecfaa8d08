use rand::RngCore;

use crate::utils::time::current_timestamp;

/// Generates a 24-character hex id: 4 timestamp bytes followed by 8
/// random bytes, the layout document stores use for object ids.
pub fn new_object_id() -> String {
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&(current_timestamp() as u32).to_be_bytes());
    rand::rng().fill_bytes(&mut bytes[4..]);
    hex::encode(bytes)
}

pub fn is_valid_object_id(id: &str) -> bool {
    id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_valid() {
        for _ in 0..16 {
            let id = new_object_id();
            assert_eq!(id.len(), 24);
            assert!(is_valid_object_id(&id));
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = new_object_id();
        let b = new_object_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_embeds_current_time() {
        let before = current_timestamp();
        let id = new_object_id();
        let after = current_timestamp();

        let secs = i64::from(u32::from_be_bytes(
            hex::decode(&id[..8]).unwrap().try_into().unwrap(),
        ));
        assert!(secs >= before && secs <= after);
    }

    #[test]
    fn test_validation_rejects_bad_ids() {
        assert!(is_valid_object_id("507f1f77bcf86cd799439011"));
        assert!(is_valid_object_id("507F1F77BCF86CD799439011"));

        assert!(!is_valid_object_id(""));
        assert!(!is_valid_object_id("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!is_valid_object_id("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!is_valid_object_id("507f1f77bcf86cd79943901g")); // non-hex
        assert!(!is_valid_object_id("507f1f77-cf86cd799439011"));
    }
}
