use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base HTTP origin of the Q&A backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Built-in defaults, used when no config file is present.
    pub fn minimal() -> Self {
        Self {
            backend: BackendConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&mut config)?;
    Ok(config)
}

/// Load the config file if it exists; otherwise fall back to defaults.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::minimal())
    }
}

fn validate(config: &mut Config) -> Result<()> {
    let url = &config.backend.base_url;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!(
            "backend.base_url must start with http:// or https://, got '{}'",
            url
        );
    }

    // Endpoint paths are joined with a leading slash
    while config.backend.base_url.ends_with('/') {
        config.backend.base_url.pop();
    }

    if config.backend.base_url.len() < "http://x".len() {
        anyhow::bail!("backend.base_url is missing a host");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_defaults() {
        let config = Config::minimal();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_parse_with_trailing_slash_stripped() {
        let mut config: Config =
            toml::from_str("[backend]\nbase_url = \"http://localhost:9000/\"\n").unwrap();
        validate(&mut config).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config: Config =
            toml::from_str("[backend]\nbase_url = \"ftp://example.com\"\n").unwrap();
        assert!(validate(&mut config).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = load_or_default(Path::new("/nonexistent/dqa.toml")).unwrap();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    }
}
