//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into AppConfig DTO
//! - ✅ Report I/O and parsing errors with context
//!
//! `load_config` performs pure data loading. Defaults and command-line
//! overrides are applied afterwards by `resolve_config`.

use anyhow::Context;
use std::path::PathBuf;
use sf_core::config::AppConfig;
use tracing::info;

/// Load configuration from a TOML file
///
/// **NO validation is performed**:
/// - Empty strings are valid (they are facts)
/// - Missing sections result in empty values (facts)
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Build the effective configuration: file (if any), then defaults for
/// every empty value, then the command-line base URL override.
pub fn resolve_config(
    config_path: Option<PathBuf>,
    api_base_url: Option<String>,
) -> anyhow::Result<AppConfig> {
    let config = match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config file");
            load_config(path)?.or_defaults()
        }
        None => AppConfig::with_defaults(),
    };

    Ok(match api_base_url {
        Some(api_base_url) if !api_base_url.is_empty() => AppConfig {
            api_base_url,
            ..config
        },
        _ => config,
    })
}
