//! Chat-completion errors

use thiserror::Error;

/// Errors that can occur when calling the chat-completion upstream
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Failed to connect to the upstream server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the upstream server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout while waiting for the upstream
    #[error("Completion timeout after {0}ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(60000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message() {
        let err = CompletionError::ServerError("status 502".to_string());
        assert_eq!(err.to_string(), "Server error: status 502");
    }

    #[test]
    fn timeout_message_includes_duration() {
        let err = CompletionError::Timeout(60000);
        assert_eq!(err.to_string(), "Completion timeout after 60000ms");
    }
}
