//! API client error types

use thiserror::Error;

/// Shown for any failure where no response arrived
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Errors that can occur when talking to the Linkboard API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Non-2xx response; `message` comes from the body when it has one
    #[error("API error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// The request failed before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// The configured timeout elapsed
    #[error("Request timeout")]
    Timeout,

    /// A 2xx body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// An authenticated call was attempted without a session
    #[error("Not logged in")]
    Unauthenticated,

    /// The HTTP client could not be constructed
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl ClientError {
    /// Whether no response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }

    /// Message to show the user, with `fallback` for errors that carry none
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Network(_) | Self::Timeout => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Unauthenticated => "Please sign in to continue".to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Build an [`ClientError::Api`] from a status and raw body text
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::models::ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Self::Api { status, message }
    }
}

/// Result type for API operations
pub type ClientResult<T> = Result<T, ClientError>;
