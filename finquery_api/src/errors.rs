//! Error types for the query client.

/// Errors that can occur when issuing a query.
///
/// Every variant is a terminal outcome of a single call: nothing is retried
/// or recovered internally.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response: connection failure, DNS
    /// failure, or client-side timeout.
    #[error("transport failure")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status. Carries the exact
    /// status code and raw body text.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The server answered with a success status but the body was not valid
    /// JSON. `body` holds a bounded snippet of the offending text.
    #[error("failed to decode response body: {source}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
    /// A decoded row did not satisfy the expected record schema. Points at
    /// the first offending row and field.
    #[error("record {index}: field `{field}`: {reason}")]
    Validation {
        index: usize,
        field: String,
        reason: String,
    },
    /// A mandated credential is absent or the endpoint settings are
    /// malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// True when the failure was the client-side timeout elapsing before a
    /// response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}
