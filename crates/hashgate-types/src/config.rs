//! Configuration types for Hashgate.
//!
//! `HashgateConfig` represents the top-level `config.toml` that controls the
//! default hashing policy and the Argon2id cost parameters.

use serde::{Deserialize, Serialize};

/// Top-level configuration for Hashgate.
///
/// Loaded from `{data_dir}/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashgateConfig {
    /// Whether accounts hash credential attributes by default. Individual
    /// accounts may override this per request.
    #[serde(default = "default_hashing_enabled")]
    pub hashing_enabled: bool,

    /// Argon2id cost parameters for credential hashing.
    #[serde(default)]
    pub argon2: Argon2Params,
}

fn default_hashing_enabled() -> bool {
    true
}

impl Default for HashgateConfig {
    fn default() -> Self {
        Self {
            hashing_enabled: default_hashing_enabled(),
            argon2: Argon2Params::default(),
        }
    }
}

/// Argon2id cost parameters.
///
/// Defaults follow the OWASP recommendation: 19 MiB memory, 2 iterations,
/// 1 degree of parallelism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of iterations (time cost).
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_memory_kib() -> u32 {
    19_456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}
