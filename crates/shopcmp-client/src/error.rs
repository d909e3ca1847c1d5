use thiserror::Error;

/// Errors returned by [`crate::ShopClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, body read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status on the final attempt.
    #[error("request to {url} failed with HTTP {status}{}", detail_suffix(.detail))]
    HttpStatus {
        status: u16,
        url: String,
        /// The `detail` message from the backend's JSON error body, if any.
        detail: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request was rejected locally before anything was sent.
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status of the terminal response, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Backend-supplied error message, when there was one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::HttpStatus { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}
