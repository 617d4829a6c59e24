//! Configuration loader for Hashgate.
//!
//! Reads `config.toml` from the data directory (`~/.hashgate/` in production)
//! and deserializes it into [`HashgateConfig`]. Falls back to sensible
//! defaults when the file is missing or malformed.

use std::path::Path;

use hashgate_types::config::HashgateConfig;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`HashgateConfig::default()`]
///   (hashing enabled, OWASP Argon2id costs).
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> HashgateConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return HashgateConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return HashgateConfig::default();
        }
    };

    match toml::from_str::<HashgateConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            HashgateConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert!(config.hashing_enabled);
        assert_eq!(config.argon2.memory_kib, 19_456);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
hashing_enabled = true

[argon2]
memory_kib = 65536
iterations = 3
parallelism = 2
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert!(config.hashing_enabled);
        assert_eq!(config.argon2.memory_kib, 65_536);
        assert_eq!(config.argon2.iterations, 3);
        assert_eq!(config.argon2.parallelism, 2);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert!(config.hashing_enabled);
        assert_eq!(config.argon2.iterations, 2);
    }
}
