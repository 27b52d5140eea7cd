//! Errors raised while building a coordinator result

use thiserror::Error;

/// Errors that can occur when constructing a [`CoordinatorResult`]
///
/// [`CoordinatorResult`]: crate::state_machine::CoordinatorResult
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ResultError {
    pub(crate) fn missing_records() -> Self {
        ResultError::InvalidArgument(
            "records must be present (use an empty sequence for no records)".to_string(),
        )
    }
}
