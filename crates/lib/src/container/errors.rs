//! Error types for container operations.
//!
//! This module defines structured error types for failures that can occur while
//! addressing or reshaping a [`Container`](crate::Container). Absence of a key is
//! never an error: read operations report it through `Option` instead.

use thiserror::Error;

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// A key expression could not be parsed, or names a target the operation
    /// cannot act on (for example, assigning through an interval).
    #[error("Invalid key expression '{expr}': {reason}")]
    InvalidExpression { expr: String, reason: String },

    /// An operation received an argument outside its accepted range
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },
}

impl ContainerError {
    /// Shorthand for building an [`ContainerError::InvalidExpression`].
    pub(crate) fn invalid_expression(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        ContainerError::InvalidExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for building an [`ContainerError::InvalidArgument`].
    pub(crate) fn invalid_argument(
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ContainerError::InvalidArgument {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error comes from a malformed or unusable key expression
    pub fn is_invalid_expression(&self) -> bool {
        matches!(self, ContainerError::InvalidExpression { .. })
    }

    /// Check if this error comes from an out-of-range argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ContainerError::InvalidArgument { .. })
    }

    /// Get the offending expression if this is an expression error
    pub fn expression(&self) -> Option<&str> {
        match self {
            ContainerError::InvalidExpression { expr, .. } => Some(expr),
            _ => None,
        }
    }

    /// Get the operation name if this is an argument error
    pub fn operation(&self) -> Option<&str> {
        match self {
            ContainerError::InvalidArgument { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

// Conversion from ContainerError to the main Error type
impl From<ContainerError> for crate::Error {
    fn from(err: ContainerError) -> Self {
        crate::Error::Container(err)
    }
}
