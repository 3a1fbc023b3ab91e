//! Error type for request construction and execution.
//!
//! # Design
//! `MalformedUrl` gets a dedicated variant because it is the one failure the
//! builder itself can produce: the accumulated URL string does not parse.
//! It is surfaced as an `Err` from the snapshot step, never a panic. All
//! transport-reported failures (connect, TLS, timeout) land in `Transport`
//! with the transport's own message carried verbatim.

use std::fmt;

/// Errors surfaced by `RequestBuilder::execute` and `into_request`.
#[derive(Debug)]
pub enum HttpError {
    /// The accumulated URL string could not be parsed into a valid URL.
    MalformedUrl { url: String, reason: String },

    /// Failure reported by the transport while executing the request.
    Transport(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::MalformedUrl { url, reason } => {
                write!(f, "malformed URL {url:?}: {reason}")
            }
            HttpError::Transport(msg) => write!(f, "transport failure: {msg}"),
        }
    }
}

impl std::error::Error for HttpError {}
