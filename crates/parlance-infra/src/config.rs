//! Global configuration loader for Parlance.
//!
//! Reads `config.toml` from the data directory (`~/.parlance/` in
//! production) and deserializes it into [`GlobalConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use parlance_types::config::GlobalConfig;

/// Resolve the data directory: `PARLANCE_DATA_DIR` if set, otherwise
/// `~/.parlance`, otherwise `./.parlance`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PARLANCE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".parlance"))
        .unwrap_or_else(|| PathBuf::from(".parlance"))
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 120);
        assert_eq!(config.agent.model, "gpt-4o");
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
request_timeout_secs = 45

[generation.polyglot]
name = "openai"
provider_type = "openai_compatible"
api_key_env = "OPENAI_API_KEY"
model = "gpt-4o-mini"
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 45);
        assert_eq!(config.generation.polyglot.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn resolve_data_dir_ends_with_parlance_by_default() {
        // Only assert the shape; the env var is process-global and other
        // tests may run in parallel.
        if std::env::var("PARLANCE_DATA_DIR").is_err() {
            let dir = resolve_data_dir();
            assert!(dir.ends_with(".parlance"));
        }
    }
}
