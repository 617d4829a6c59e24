//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (hashgate-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod account;

/// Sort order for list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}
