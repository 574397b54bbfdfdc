//! Driver error types

/// Errors returned by a [`FormHandle`](crate::driver::FormHandle).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    /// The form task has stopped and no longer accepts commands.
    #[error("Form task is no longer running")]
    Closed,
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for DriverError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        Self::Closed
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for DriverError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        Self::Closed
    }
}
