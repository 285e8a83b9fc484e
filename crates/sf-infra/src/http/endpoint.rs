//! API endpoint descriptors shared by every HTTP adapter.

use reqwest::Method;
use sf_core::config::AppConfig;

use super::HttpClientError;

/// Path and method of one backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub path: String,
    pub method: Method,
}

impl ApiEndpoint {
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    /// Build an endpoint from a configured method name such as `"post"`.
    pub fn parse(path: impl Into<String>, method: &str) -> Result<Self, HttpClientError> {
        let method = Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
            .map_err(|_| HttpClientError::InvalidMethod(method.to_string()))?;
        Ok(Self::new(path, method))
    }
}

/// Descriptor table of the storefront endpoints used by this client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontApi {
    pub register: ApiEndpoint,
}

impl StorefrontApi {
    pub fn from_config(config: &AppConfig) -> Result<Self, HttpClientError> {
        Ok(Self {
            register: ApiEndpoint::parse(
                config.register_path.clone(),
                &config.register_method,
            )?,
        })
    }
}
