//! Client error type.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the action that triggered it. Handlers turn a
//! `ClientError` into a log line plus an alert; fetchers turn it into an
//! empty sentinel. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while talking to the API or collecting form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// The backend's `error` field, when the body carried one.
        message: Option<String>,
    },

    /// A body could not be encoded or decoded as the expected JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// Required user input was missing; no request was made.
    #[error("{0}")]
    Validation(&'static str),
}

impl ClientError {
    /// The backend-provided error text, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref().filter(|message| !message.is_empty()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
