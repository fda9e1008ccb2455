//! Utility modules
//!
//! Error types and result types shared across the converter.

pub mod error;

// Re-export commonly used items
pub use error::{ExprError, ExprResult};
