//! Infrastructure layer for Hashgate.
//!
//! Contains implementations of the traits defined in `hashgate-core`:
//! SQLite storage, Argon2id credential hashing, plus config loading and
//! tracing initialization.

pub mod config;
pub mod crypto;
pub mod sqlite;
pub mod telemetry;
