//! Hashable capability trait: the per-entity hashing policy flag plus the
//! attribute-hashing operation the [`HashingObserver`] dispatches to.
//!
//! [`HashingObserver`]: crate::observer::HashingObserver

use hashgate_types::account::UserAccount;
use hashgate_types::error::HashError;

use crate::service::hash::AttributeHasher;

/// Capability exposed by any entity whose sensitive attributes are hashed
/// before persistence.
///
/// The observer reads `hashing_enabled` and, when true, calls
/// `hash_attributes` exactly once. `hash_attributes` is the sole owner of
/// attribute mutation; nothing else in the workspace rewrites credential
/// fields.
pub trait Hashable {
    /// The hashing policy flag for this entity.
    fn hashing_enabled(&self) -> bool;

    /// Replace sensitive attributes with their hashed forms.
    ///
    /// Values the hasher already recognizes as hashed are left untouched,
    /// so the hook may run at every pre-update point without re-hashing a
    /// stored credential. Fresh plaintext is always hashed.
    fn hash_attributes(&mut self, hasher: &dyn AttributeHasher) -> Result<(), HashError>;
}

impl Hashable for UserAccount {
    fn hashing_enabled(&self) -> bool {
        self.hashing
    }

    fn hash_attributes(&mut self, hasher: &dyn AttributeHasher) -> Result<(), HashError> {
        if !hasher.is_hashed(&self.password) {
            self.password = hasher.hash(&self.password)?;
        }
        if let Some(answer) = self.security_answer.take() {
            let hashed = if hasher.is_hashed(&answer) {
                answer
            } else {
                hasher.hash(&answer)?
            };
            self.security_answer = Some(hashed);
        }
        Ok(())
    }
}
