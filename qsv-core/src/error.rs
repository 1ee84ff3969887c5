//! Error types for the circuit engine

use qsv_state::StateError;
use thiserror::Error;

/// Errors raised by [`crate::QuantumCircuit`] and the algorithm builders
///
/// Every error is raised synchronously by the call that violates a contract,
/// before any amplitude is touched. Nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantumError {
    /// Construction or buffer error from the state layer
    #[error(transparent)]
    State(#[from] StateError),

    /// Qubit index outside the register
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// The same qubit listed twice in a multi-qubit gate
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(usize),

    /// Wrong number of variational parameters
    #[error("Expected {expected} parameters, got {actual}")]
    InvalidParamCount { expected: usize, actual: usize },

    /// Shot count must be positive
    #[error("Shot count must be positive, got {0}")]
    InvalidShots(usize),

    /// Probability outside [0, 1] in a noise model
    #[error("Noise probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Result type for circuit operations
pub type Result<T> = std::result::Result<T, QuantumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_qubit_message() {
        let err = QuantumError::InvalidQubit(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_state_error_is_transparent() {
        let err: QuantumError = StateError::UnsupportedQubitCount { num_qubits: 99 }.into();
        assert!(format!("{}", err).contains("99"));
    }

    #[test]
    fn test_param_count_message() {
        let err = QuantumError::InvalidParamCount {
            expected: 10,
            actual: 7,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("10"));
        assert!(msg.contains("7"));
    }
}
