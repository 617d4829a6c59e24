//! Argon2id credential hashing.
//!
//! Implements the `AttributeHasher` trait from `hashgate-core` using the
//! `argon2` crate (RustCrypto ecosystem). Hashes are emitted as PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$digest`), which embed algorithm,
//! parameters, and salt, so verification needs no out-of-band state.
//!
//! SECURITY: Error values never contain plaintext or hash material.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use hashgate_core::service::hash::AttributeHasher;
use hashgate_types::config::Argon2Params;
use hashgate_types::error::HashError;

/// Argon2id implementation of `AttributeHasher`.
///
/// Each hash call generates a fresh random salt, so hashing the same
/// plaintext twice produces different PHC strings that both verify.
pub struct Argon2AttributeHasher {
    argon2: Argon2<'static>,
}

impl Argon2AttributeHasher {
    /// Create a hasher with the given cost parameters.
    ///
    /// Fails with `HashError::InvalidParams` when the parameter combination
    /// is rejected by the algorithm (e.g., zero iterations or memory below
    /// the per-lane minimum).
    pub fn new(params: &Argon2Params) -> Result<Self, HashError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| HashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl AttributeHasher for Argon2AttributeHasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| HashError::HashingFailed)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(|_| HashError::MalformedHash)?;
        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(HashError::MalformedHash),
        }
    }

    fn is_hashed(&self, value: &str) -> bool {
        PasswordHash::new(value).is_ok()
    }
}
