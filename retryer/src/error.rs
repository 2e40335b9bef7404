//! Error classification for retry decisions

/// Trait for errors that may carry an embedded response status
///
/// The retry policy treats an embedded status of 400 or above as fatal;
/// everything else is transient and subject only to the attempt budget.
pub trait Retryable {
    /// Status code of the embedded response descriptor, if any
    fn response_status(&self) -> Option<u16>;

    /// Whether this error is fatal (never retried)
    fn is_fatal(&self) -> bool {
        matches!(self.response_status(), Some(status) if status >= 400)
    }
}

/// Error type for HTTP-style calls wrapped in an operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// The call completed but the response carried an error status
    #[error("Response status: {status}")]
    Status { status: u16 },

    /// The call never produced a response
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Retryable for CallError {
    fn response_status(&self) -> Option<u16> {
        match self {
            CallError::Status { status } => Some(*status),
            CallError::Transport(_) => None,
        }
    }
}
