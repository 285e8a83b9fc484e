//! HTTP adapter for [`RegistrationApiPort`].

use async_trait::async_trait;
use serde::Deserialize;
use sf_core::config::AppConfig;
use sf_core::ports::{ApiError, RegistrationApiPort};
use sf_core::registration::{RegisterRequest, RegistrationReply};
use tracing::{debug, info_span, warn, Instrument};

use super::client::HttpClient;
use super::endpoint::{ApiEndpoint, StorefrontApi};
use super::HttpClientError;

/// Error bodies only need to carry a `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpRegistrationApi {
    client: HttpClient,
    endpoint: ApiEndpoint,
}

impl HttpRegistrationApi {
    pub fn new(client: HttpClient, endpoint: ApiEndpoint) -> Self {
        Self { client, endpoint }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, HttpClientError> {
        let api = StorefrontApi::from_config(config)?;
        Ok(Self::new(HttpClient::from_config(config)?, api.register))
    }
}

#[async_trait]
impl RegistrationApiPort for HttpRegistrationApi {
    async fn register(&self, request: &RegisterRequest) -> Result<RegistrationReply, ApiError> {
        let span = info_span!(
            "infra.http.register",
            method = %self.endpoint.method,
            url = %self.client.url(&self.endpoint),
        );
        async {
            let response = self
                .client
                .request(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|err| {
                    warn!(error = %err, timeout = err.is_timeout(), "registration request not sent");
                    ApiError::Transport(err.to_string())
                })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| ApiError::Transport(err.to_string()))?;
            debug!(status = status.as_u16(), "registration response received");

            if !status.is_success() {
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .ok()
                    .and_then(|body| body.message);
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            serde_json::from_str::<RegistrationReply>(&body)
                .map_err(|err| ApiError::Malformed(err.to_string()))
        }
        .instrument(span)
        .await
    }
}
