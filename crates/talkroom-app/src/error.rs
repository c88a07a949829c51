//! Error types for the room-lifecycle core.
//!
//! These are internal precondition failures. The [`crate::Session`] heals or
//! logs every one of them; none reaches the runtime.

use thiserror::Error;

/// Errors from [`crate::TabManager`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Operation needs an open tab for this room and there is none.
    #[error("no open tab for room {0:?}")]
    TabNotFound(String),
}
