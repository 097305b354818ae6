//! Tool-specific error types.

use thiserror::Error;

use crate::domains::gigapipe::QueryError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The query pipeline failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
