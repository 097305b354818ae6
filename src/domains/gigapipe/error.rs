//! Query pipeline error types.

use thiserror::Error;

/// Result type for query pipeline operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Broad category of a [`QueryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Tool arguments were missing or unusable. No request was sent.
    Validation,
    /// The backend could not be reached, or the request was aborted.
    Transport,
    /// The backend answered with a non-200 status.
    Upstream,
    /// The backend answered with something other than a JSON object.
    Decode,
}

/// Errors that can occur while running a query against the backend.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A required argument was not supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// An argument was supplied but cannot be used.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Connection, DNS, timeout or cancellation failure.
    #[error("request to backend failed: {0}")]
    Transport(String),

    /// Non-200 response from the backend.
    #[error("request failed with status {status}")]
    Upstream { status: u16 },

    /// The response body was not a JSON object.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl QueryError {
    /// Create a "missing argument" error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create an "invalid argument" error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport(cause.into())
    }

    /// Transport error raised when the invocation is cancelled.
    pub fn cancelled() -> Self {
        Self::Transport("request cancelled".to_string())
    }

    /// Create a decode error.
    pub fn decode(cause: impl Into<String>) -> Self {
        Self::Decode(cause.into())
    }

    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) | Self::InvalidArgument { .. } => ErrorKind::Validation,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Map a `reqwest` failure to a transport error without leaking the URL.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        let summary = if err.is_timeout() {
            "timed out"
        } else if err.is_connect() {
            "could not connect"
        } else if err.is_body() || err.is_decode() {
            "could not read response body"
        } else {
            "request error"
        };
        Self::Transport(format!("{}: {}", summary, err.without_url()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_kinds() {
        assert_eq!(
            QueryError::missing("query").to_string(),
            "missing required argument: query"
        );
        assert_eq!(
            QueryError::Upstream { status: 500 }.to_string(),
            "request failed with status 500"
        );
        assert!(
            QueryError::decode("eof")
                .to_string()
                .starts_with("failed to decode")
        );
        assert!(QueryError::cancelled().to_string().contains("cancelled"));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(QueryError::missing("x").kind(), ErrorKind::Validation);
        assert_eq!(
            QueryError::invalid_argument("x", "bad").kind(),
            ErrorKind::Validation
        );
        assert_eq!(QueryError::cancelled().kind(), ErrorKind::Transport);
        assert_eq!(
            QueryError::Upstream { status: 404 }.kind(),
            ErrorKind::Upstream
        );
        assert_eq!(QueryError::decode("x").kind(), ErrorKind::Decode);
    }
}
