/// Failure talking to the chat-completions API.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The reply could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A gateway call failed. The message names the operation, e.g.
/// `Failed to analyze text: HTTP request failed: ...`.
#[derive(Debug, thiserror::Error)]
#[error("Failed to {action}: {source}")]
pub struct GatewayError {
    pub action: &'static str,
    #[source]
    pub source: ChatError,
}

impl GatewayError {
    pub fn new(action: &'static str, source: ChatError) -> Self {
        Self { action, source }
    }
}
