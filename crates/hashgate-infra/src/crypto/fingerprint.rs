//! SHA-256 fingerprints for audit logging.
//!
//! Repository writes log a short fingerprint of the stored credential hash
//! so credential rotations are visible in logs without ever logging the
//! credential (or its full hash) itself.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest. Enough to correlate log
/// lines, far too short to be reversible or useful to an attacker.
const FINGERPRINT_LEN: usize = 12;

/// Compute a truncated lowercase-hex SHA-256 fingerprint of a value.
pub fn content_fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_known_value() {
        // SHA-256 of empty string, truncated.
        assert_eq!(content_fingerprint(""), "e3b0c44298fc");
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let a = content_fingerprint("$argon2id$v=19$m=64,t=1,p=1$abc$def");
        let b = content_fingerprint("$argon2id$v=19$m=64,t=1,p=1$abc$def");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        assert_ne!(content_fingerprint("hash A"), content_fingerprint("hash B"));
    }

    #[test]
    fn test_fingerprint_is_short_lowercase_hex() {
        let fpr = content_fingerprint("anything");
        assert_eq!(fpr.len(), FINGERPRINT_LEN);
        assert!(fpr.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(fpr.chars().all(|c| !c.is_ascii_uppercase()));
    }
}
