// ABOUTME: Error type surfaced by the consultation API client

use thiserror::Error;

/// Message used when a failed response carries no usable `detail`
pub const GENERIC_API_ERROR: &str = "An error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the backend
    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },

    /// Connection, DNS or I/O failure before a response was received
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// 2xx response whose body did not match the expected JSON shape
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Build an HTTP error from a failed response body.
    ///
    /// The body is read as `{"detail": "..."}`; anything else (empty, HTML,
    /// missing or non-string `detail`) falls back to [`GENERIC_API_ERROR`].
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let parsed: serde_json::Value =
            serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({}));

        let message = parsed
            .get("detail")
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or(GENERIC_API_ERROR)
            .to_string();

        Self::Http { status, message }
    }

    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    /// Server-supplied message for HTTP errors, the error text otherwise
    pub fn message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
