//! Error types for state-vector operations

use thiserror::Error;

/// Errors that can occur during state-vector operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Qubit count outside the supported range
    #[error("Unsupported qubit count {num_qubits}: must be between 1 and {max}", max = crate::MAX_QUBITS)]
    UnsupportedQubitCount { num_qubits: usize },

    /// Amplitude slice length does not match 2^num_qubits
    #[error("Dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for state-vector operations
pub type Result<T> = std::result::Result<T, StateError>;
