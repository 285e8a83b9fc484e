//! Generic translation of failed registration calls into toast text.

use sf_core::ports::ApiError;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

/// Message shown for a failed call.
///
/// A server-supplied `message` in the error body wins; otherwise the text
/// depends on how the call failed.
pub fn toast_message(err: &ApiError) -> String {
    match err {
        ApiError::Status {
            message: Some(message),
            ..
        } if !message.trim().is_empty() => message.clone(),
        ApiError::Status { status, .. } => format!("Request failed with status code {status}"),
        ApiError::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
        ApiError::Malformed(_) => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_in_error_body_wins() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Provide email, name, password".to_string()),
        };
        assert_eq!(toast_message(&err), "Provide email, name, password");
    }

    #[test]
    fn blank_server_message_falls_back_to_status() {
        let err = ApiError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(toast_message(&err), "Request failed with status code 500");
    }

    #[test]
    fn transport_and_malformed_use_fixed_text() {
        assert_eq!(
            toast_message(&ApiError::Transport("connection refused".to_string())),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(
            toast_message(&ApiError::Malformed("expected value".to_string())),
            GENERIC_ERROR_MESSAGE
        );
    }
}
