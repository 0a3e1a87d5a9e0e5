use std::fmt;

use async_trait::async_trait;

/// Errors that can occur during completion operations.
/// None of these are retried; a failed exchange is surfaced as-is.
#[derive(Debug)]
pub enum CompletionError {
    /// Client misconfigured (empty API key, bad base URL). Fatal at startup.
    InvalidConfig(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// A success response whose body had no usable candidate text.
    MalformedResponse(String),
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::InvalidConfig(msg) => write!(f, "config error: {msg}"),
            CompletionError::Network(msg) => write!(f, "network error: {msg}"),
            CompletionError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            CompletionError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for CompletionError {}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the name of the client.
    fn name(&self) -> &str;

    /// Requests one completion for the given prompt and returns the full
    /// response text. Each call is stateless: exactly the submitted text is
    /// sent, with no prior turns.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
