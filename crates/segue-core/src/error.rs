//! Error types for the Segue main loop.

/// Errors raised by the main loop and its timer/task bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoopError {
    /// The timer ID is invalid or the timer already fired or was stopped.
    #[error("invalid or expired timer ID")]
    InvalidTimerId,
    /// The task ID is invalid or the task already ran or was cancelled.
    #[error("invalid or already processed task ID")]
    InvalidTaskId,
}

/// A specialized Result type for main loop operations.
pub type Result<T> = std::result::Result<T, LoopError>;
