//! Error types for text operations.

use thiserror::Error;

/// Structured error types for [`Text`](crate::Text) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// `split` was called with an empty delimiter
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    /// A regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl TextError {
    /// Check if this error comes from a pattern that failed to compile
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, TextError::InvalidPattern { .. })
    }

    /// Get the offending pattern, if any
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TextError::InvalidPattern { pattern, .. } => Some(pattern),
            TextError::EmptyDelimiter => None,
        }
    }
}

// Conversion from TextError to the main Error type
impl From<TextError> for crate::Error {
    fn from(err: TextError) -> Self {
        crate::Error::Text(err)
    }
}
