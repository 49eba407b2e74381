use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by [`PhishingClient`](crate::PhishingClient) operations.
///
/// `MissingIdentity` and `WindowTooLarge` are raised before any network I/O;
/// everything else describes a failed request.
#[derive(Debug, Error)]
pub enum PhishingError {
    #[error("missing or empty identity")]
    MissingIdentity,

    #[error("recent window of {0} seconds exceeds the 604800 second maximum")]
    WindowTooLarge(u64),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected status code {0}")]
    Status(u16),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl PhishingError {
    /// True for errors raised before a request is dispatched.
    ///
    /// The lenient layer keeps surfacing these; only failures of an actual
    /// request collapse to sentinel values there.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingIdentity | Self::WindowTooLarge(_))
    }
}
