//! Cryptographic operations for Hashgate.
//!
//! - `argon2`: Argon2id credential hashing (the `AttributeHasher` adapter)
//! - `fingerprint`: SHA-256 fingerprints for audit logging

pub mod argon2;
pub mod fingerprint;
