//! Convenience result alias used across the workspace.

use crate::error::AppError;

/// Result type carrying [`AppError`] as the failure case.
pub type AppResult<T> = Result<T, AppError>;
