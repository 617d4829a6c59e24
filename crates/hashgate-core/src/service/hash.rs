//! AttributeHasher trait for credential hashing.
//!
//! Defined in hashgate-core so entities and services can hash attributes
//! without coupling to a specific algorithm. The `Argon2AttributeHasher`
//! adapter lives in hashgate-infra.

use hashgate_types::error::HashError;

/// Abstraction over one-way credential hashing.
///
/// Implementations must produce self-describing hash strings (PHC format)
/// so `verify` and `is_hashed` need no out-of-band algorithm knowledge.
pub trait AttributeHasher: Send + Sync {
    /// Hash a plaintext value. Each call salts independently, so hashing the
    /// same plaintext twice produces different output.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// Check a plaintext candidate against a stored hash.
    ///
    /// Returns `Ok(false)` for a well-formed hash that does not match;
    /// a malformed stored hash is an error, not a mismatch.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError>;

    /// Whether a value is already in hashed form.
    fn is_hashed(&self, value: &str) -> bool;
}
