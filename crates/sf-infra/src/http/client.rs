use reqwest::{Client, RequestBuilder};
use sf_core::config::AppConfig;
use tracing::debug;

use super::endpoint::ApiEndpoint;
use super::HttpClientError;

/// Thin wrapper over `reqwest::Client` that resolves endpoint paths against
/// the backend origin and keeps cookies when credentials are enabled.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, HttpClientError> {
        let mut builder = Client::builder().cookie_store(config.with_credentials);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpClientError::Build)?;
        debug!(
            base_url = %config.api_base_url,
            with_credentials = config.with_credentials,
            "http client built"
        );
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Absolute URL of an endpoint, joined on exactly one `/`.
    pub fn url(&self, endpoint: &ApiEndpoint) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = endpoint.path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    pub fn request(&self, endpoint: &ApiEndpoint) -> RequestBuilder {
        self.client
            .request(endpoint.method.clone(), self.url(endpoint))
    }
}
