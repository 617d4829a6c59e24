//! Business logic and repository trait definitions for Hashgate.
//!
//! This crate defines the "ports" (repository and hasher traits) that the
//! infrastructure layer implements, the [`Hashable`] capability trait, and
//! the [`HashingObserver`] hook that gates credential hashing at the two
//! persistence lifecycle points (pre-insert, pre-update). It depends only on
//! `hashgate-types` -- never on `hashgate-infra` or any database/crypto crate.
//!
//! [`Hashable`]: hashable::Hashable
//! [`HashingObserver`]: observer::HashingObserver

pub mod hashable;
pub mod observer;
pub mod repository;
pub mod service;
