//! Shared domain types for Hashgate.
//!
//! This crate contains the account entity, hashing policy configuration,
//! and the error types used across the Hashgate workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror,
//! and secrecy.

pub mod account;
pub mod config;
pub mod error;
