//! Core error types (deterministic only)

use thiserror::Error;

/// Translation errors (no I/O, no external failures)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Input was empty or contained only whitespace
    #[error("invalid argument `{name}`: source string cannot be empty or whitespace")]
    InvalidArgument {
        /// Name of the rejected argument (`phrase` or `word`)
        name: &'static str,
    },
}

impl TranslateError {
    /// Check whether this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TranslateError::InvalidArgument { .. })
    }
}

/// Result type for translation operations
pub type Result<T> = core::result::Result<T, TranslateError>;

/// Reject empty or all-whitespace input before any output is produced
pub(crate) fn ensure_not_blank(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TranslateError::InvalidArgument { name });
    }
    Ok(())
}
