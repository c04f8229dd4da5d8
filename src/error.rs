//! Error types for register operations

use thiserror::Error;

/// Errors that can occur while building or applying gates on a register
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegisterError {
    /// An argument was rejected before touching the state
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Qubit index outside the register
    #[error("Qubit index {index} out of range for {num_qubits}-qubit register")]
    IndexOutOfRange { index: usize, num_qubits: usize },

    /// Operator shape does not match the state dimension
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl RegisterError {
    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an out-of-range qubit error
    pub fn index_out_of_range(index: usize, num_qubits: usize) -> Self {
        Self::IndexOutOfRange { index, num_qubits }
    }
}

/// Result type for register operations
pub type Result<T> = std::result::Result<T, RegisterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = RegisterError::index_out_of_range(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3-qubit"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = RegisterError::invalid_argument("qubit count must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid argument: qubit count must be positive"
        );
    }
}
