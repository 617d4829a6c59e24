//! Business logic services (use cases).
//!
//! Services orchestrate repository calls and the pre-persistence hashing
//! hook. They depend on traits (ports) -- never on concrete infrastructure
//! implementations.

pub mod account;
pub mod hash;
