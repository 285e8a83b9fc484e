//! HTTP infrastructure: client wrapper, endpoint table and API adapters.

pub mod client;
pub mod endpoint;
pub mod registration_api;

pub use client::HttpClient;
pub use endpoint::{ApiEndpoint, StorefrontApi};
pub use registration_api::HttpRegistrationApi;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
