//! Pre-persistence hashing hook.
//!
//! `HashingObserver` gates attribute hashing by the per-entity policy flag
//! at the two persistence lifecycle points: before insert and before update.
//! It is composed explicitly -- the service layer holds a typed observer and
//! calls it directly ahead of each repository write. There is no global
//! registration or dispatch.

use hashgate_types::error::HashError;

use crate::hashable::Hashable;
use crate::service::hash::AttributeHasher;

/// Stateless hook invoked immediately before an entity is inserted or
/// updated.
///
/// Per invocation the observer makes exactly zero or one call to
/// [`Hashable::hash_attributes`]: one when the entity's policy flag is set,
/// zero otherwise. It performs no deduplication -- invoking it twice on the
/// same enabled entity hashes twice. Failures from `hash_attributes`
/// propagate unmodified so the caller aborts the persistence operation
/// (fail-closed: a failed hash must never let plaintext reach storage).
#[derive(Debug, Default, Clone, Copy)]
pub struct HashingObserver;

impl HashingObserver {
    pub fn new() -> Self {
        Self
    }

    /// Run the hook at the pre-insert lifecycle point.
    pub fn before_create<E: Hashable + ?Sized>(
        &self,
        entity: &mut E,
        hasher: &dyn AttributeHasher,
    ) -> Result<(), HashError> {
        if entity.hashing_enabled() {
            entity.hash_attributes(hasher)?;
        }
        Ok(())
    }

    /// Run the hook at the pre-update lifecycle point.
    ///
    /// Identical to [`before_create`]: the policy is lifecycle-independent,
    /// hashing happens whenever the record is about to be persisted.
    ///
    /// [`before_create`]: Self::before_create
    pub fn before_update<E: Hashable + ?Sized>(
        &self,
        entity: &mut E,
        hasher: &dyn AttributeHasher,
    ) -> Result<(), HashError> {
        if entity.hashing_enabled() {
            entity.hash_attributes(hasher)?;
        }
        Ok(())
    }
}
