//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vitrine/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Currency symbol shown in front of prices.
    pub currency: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_CURRENCY: &str = "$";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub currency: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vitrine/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vitrine").join("config.toml"))
}

/// Load config from `override_path`, or `~/.vitrine/config.toml` when none is
/// given.
///
/// An explicit override must exist and parse; the default location is
/// lenient — if the file is missing, a commented-out default is generated and
/// `VitrineConfig::default()` is returned.
pub fn load_config(override_path: Option<&Path>) -> Result<VitrineConfig, ConfigError> {
    if let Some(path) = override_path {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: VitrineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VitrineConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VitrineConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VitrineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Vitrine Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://fakestoreapi.com"  # Or set VITRINE_BASE_URL env var

# [ui]
# currency = "$"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &VitrineConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VITRINE_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Currency: config → default
    let currency = config
        .ui
        .currency
        .clone()
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    ResolvedConfig { base_url, currency }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VitrineConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.ui.currency.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = VitrineConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VitrineConfig {
            api: ApiConfig {
                base_url: Some("http://localhost:9000".to_string()),
            },
            ui: UiConfig {
                currency: Some("€".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.currency, "€");
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = VitrineConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli"));
        assert_eq!(resolved.base_url, "http://from-cli");
    }

    #[test]
    fn test_missing_override_path_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/vitrine-config.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[ui]
currency = "£"
"#;
        let config: VitrineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.currency.as_deref(), Some("£"));
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://192.168.1.50:3000"

[ui]
currency = "¥"
"#;
        let config: VitrineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://192.168.1.50:3000")
        );
        assert_eq!(config.ui.currency.as_deref(), Some("¥"));
    }
}
