//! Error handling for expression resolution
//!
//! This module provides the error and result types used by the `math:`
//! expression engine. Errors are values: the top-level dispatcher renders
//! them as a visible fragment instead of propagating them to the caller.

use std::fmt;

/// Expression resolution error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// An opening parenthesis was never closed
    UnmatchedParen { context: String },
    /// A function call could not be parsed at all
    BadFunctionCall { name: String, message: String },
    /// Nesting exceeded the maximum supported depth
    DepthExceeded { max: usize },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnmatchedParen { context } => {
                write!(f, "unmatched parenthesis in '{}'", context)
            }
            ExprError::BadFunctionCall { name, message } => {
                write!(f, "bad call to '{}': {}", name, message)
            }
            ExprError::DepthExceeded { max } => {
                write!(f, "expression nesting exceeds {} levels", max)
            }
        }
    }
}

impl std::error::Error for ExprError {}

/// Result type for expression resolution
pub type ExprResult<T> = Result<T, ExprError>;
