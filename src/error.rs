//! Error types for algokit
//!
//! There is a single failure kind: an argument rejected before any
//! computation starts. Malformed graph documents, unparsable operands,
//! invalid edge weights and unknown source nodes all land here.

mod macros;

use thiserror::Error;

/// Errors that can occur when calling into algokit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },
}

impl AlgoError {
    /// Create an error for a rejected argument
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        AlgoError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AlgoError::InvalidArgument { .. } => "invalid_argument",
        }
    }

    /// Name of the argument that was rejected
    pub fn context(&self) -> &str {
        match self {
            AlgoError::InvalidArgument { context, .. } => context,
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let AlgoError::InvalidArgument { context, value } = self;
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
                "context": context,
                "value": value,
            }
        })
    }
}

/// Result type alias for algokit operations
pub type Result<T> = std::result::Result<T, AlgoError>;
