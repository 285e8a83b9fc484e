use async_trait::async_trait;
use thiserror::Error;

use crate::registration::{RegisterRequest, RegistrationReply};

/// Failures of the registration HTTP call that are not an application-level
/// reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is the `message` field of the error body,
    /// when the body carried one.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body is not a registration reply.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait RegistrationApiPort: Send + Sync {
    /// Send one registration request. Never retried by the caller.
    async fn register(&self, request: &RegisterRequest) -> Result<RegistrationReply, ApiError>;
}

#[cfg(test)]
mockall::mock! {
    pub RegistrationApi {}

    #[async_trait]
    impl RegistrationApiPort for RegistrationApi {
        async fn register(&self, request: &RegisterRequest) -> Result<RegistrationReply, ApiError>;
    }
}
