//! Fun-fact error types.

use thiserror::Error;

/// Errors that can occur while fetching a fun fact.
///
/// None of these reach the player: [`FunFactClient::fun_fact`](super::FunFactClient::fun_fact)
/// turns every one of them into the fallback text.
#[derive(Debug, Error)]
pub enum FactError {
    /// The client is switched off.
    #[error("fun-fact client is disabled")]
    Disabled,

    /// HTTP request failed.
    #[error("fun-fact request failed: {0}")]
    RequestFailed(String),

    /// Request timed out.
    #[error("fun-fact request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("fun-fact service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response had no text.
    #[error("empty response from fun-fact service")]
    EmptyResponse,

    /// The response text was not the expected JSON.
    #[error("failed to parse fun fact: {0}")]
    ParseError(String),

    /// The response parsed but a field was blank.
    #[error("fun fact is missing {0}")]
    MissingField(&'static str),

    /// Configuration error.
    #[error("fun-fact configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FactError::Timeout
        } else {
            FactError::RequestFailed(err.to_string())
        }
    }
}
