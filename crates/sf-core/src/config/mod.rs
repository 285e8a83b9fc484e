//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//!
//! ## Iron Rule
//!
//! > **This module contains data only, no policy, no validation.**

use std::time::Duration;

/// Default backend origin used when no config file is supplied.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Registration endpoint path of the storefront API.
pub const DEFAULT_REGISTER_PATH: &str = "/api/user/register";
pub const DEFAULT_REGISTER_METHOD: &str = "POST";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin prepended to every endpoint path (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// Registration endpoint path
    pub register_path: String,

    /// Registration endpoint HTTP method, as written in the file
    pub register_method: String,

    /// Request timeout in seconds (0 means no timeout)
    pub timeout_secs: u64,

    /// Whether the client keeps and sends cookies
    pub with_credentials: bool,

    /// Path of the login view the flow navigates to after registering
    pub login_route: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation.
    /// Missing keys map to empty values, which are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let api = toml_value.get("api");
        Ok(Self {
            api_base_url: api
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            register_path: api
                .and_then(|a| a.get("register_path"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            register_method: api
                .and_then(|a| a.get("register_method"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            timeout_secs: api
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            with_credentials: api
                .and_then(|a| a.get("with_credentials"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            login_route: toml_value
                .get("routes")
                .and_then(|r| r.get("login"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            register_path: String::new(),
            register_method: String::new(),
            timeout_secs: 0,
            with_credentials: false,
            login_route: String::new(),
        }
    }

    /// Create AppConfig pointing at a locally running storefront backend.
    pub fn with_defaults() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            register_method: DEFAULT_REGISTER_METHOD.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            with_credentials: true,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }

    /// Fill every empty value with the matching default.
    ///
    /// Used by the bootstrap layer after loading a partial file.
    pub fn or_defaults(self) -> Self {
        let defaults = Self::with_defaults();
        Self {
            api_base_url: non_empty_or(self.api_base_url, defaults.api_base_url),
            register_path: non_empty_or(self.register_path, defaults.register_path),
            register_method: non_empty_or(self.register_method, defaults.register_method),
            timeout_secs: if self.timeout_secs == 0 {
                defaults.timeout_secs
            } else {
                self.timeout_secs
            },
            with_credentials: self.with_credentials,
            login_route: non_empty_or(self.login_route, defaults.login_route),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
