/*! Error types for windeck operations. */

use super::WindowId;

/// Errors that can occur during windeck operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindeckError {
  /// An operation referenced an id that was never registered.
  #[error("Window not found: {0}")]
  WindowNotFound(WindowId),

  #[error("Window registered twice: {0}")]
  DuplicateWindow(WindowId),

  #[error("Window id must not be empty")]
  InvalidWindowId,
}

/// Result type for windeck operations.
pub type WindeckResult<T> = Result<T, WindeckError>;
