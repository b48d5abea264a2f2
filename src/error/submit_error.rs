//! Persistence collaborator errors.

use thiserror::Error;

/// Failure reported by the issue store. The reason is opaque to the core:
/// it is surfaced to the user as a retryable condition, and the draft is
/// never discarded on this path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The store received the report and refused it.
    #[error("issue store rejected the report: {message}")]
    Rejected {
        message: String,
        /// Structured detail passed through from the collaborator, if any.
        detail: Option<serde_json::Value>,
    },
    /// The store could not be reached at all.
    #[error("issue store unreachable: {0}")]
    Unreachable(String),
}
