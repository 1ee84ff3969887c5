//! Dense state-vector representation with double-buffered gate application

use crate::error::{Result, StateError};
use crate::kernels;
use crate::MAX_QUBITS;
use num_complex::Complex64;

/// Dense quantum state vector
///
/// Owns a 2^n amplitude buffer plus an equally sized scratch buffer. Single-
/// qubit sweeps write into the scratch buffer and commit with a swap, so a
/// sweep never reads amplitudes it has already overwritten.
///
/// # Example
///
/// ```
/// use qsv_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.amplitudes()[0].re, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Number of qubits
    num_qubits: usize,

    /// Live amplitude buffer, length 2^num_qubits
    amps: Vec<Complex64>,

    /// Scratch buffer for out-of-place sweeps
    scratch: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns [`StateError::UnsupportedQubitCount`] unless
    /// `1 <= num_qubits <= 30`.
    ///
    /// # Example
    /// ```
    /// use qsv_state::StateVector;
    ///
    /// assert!(StateVector::new(0).is_err());
    /// assert!(StateVector::new(31).is_err());
    /// assert!(StateVector::new(5).is_ok());
    /// ```
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits < 1 || num_qubits > MAX_QUBITS {
            return Err(StateError::UnsupportedQubitCount { num_qubits });
        }

        let dimension = 1usize << num_qubits;
        let mut amps = vec![Complex64::new(0.0, 0.0); dimension];
        amps[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amps,
            scratch: vec![Complex64::new(0.0, 0.0); dimension],
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// # Errors
    /// Returns an error if the qubit count is unsupported or the slice length
    /// is not 2^num_qubits.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;

        if amplitudes.len() != state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }

        state.amps.copy_from_slice(amplitudes);
        Ok(state)
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amps.len()
    }

    /// Get a read-only view of the amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Get a mutable view of the amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amps
    }

    /// Apply a 2×2 gate matrix to one qubit
    ///
    /// The sweep is computed into the scratch buffer and committed atomically
    /// by swapping the two buffers.
    ///
    /// # Panics
    /// Debug-asserts that `qubit < num_qubits`; callers validate indices first.
    pub fn apply_single_qubit(&mut self, matrix: &[[Complex64; 2]; 2], qubit: usize) {
        debug_assert!(qubit < self.num_qubits);
        kernels::apply_single_qubit(&self.amps, &mut self.scratch, matrix, qubit);
        std::mem::swap(&mut self.amps, &mut self.scratch);
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Check whether the state is normalized within `epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Scale all amplitudes so the norm equals 1
    ///
    /// # Panics
    /// Panics if the state has zero norm — renormalizing a zero vector is an
    /// internal arithmetic failure, not a recoverable condition.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        assert!(norm > 0.0, "cannot normalize a zero-norm state vector");
        let inv_norm = 1.0 / norm;
        for amp in &mut self.amps {
            *amp *= inv_norm;
        }
    }

    /// Basis-state probabilities: |amplitude[i]|² for every index
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        for amp in &mut self.amps {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amps[0] = Complex64::new(1.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    // qsv-state does not depend on qsv-gates, so tests build their own H.
    fn hadamard() -> [[Complex64; 2]; 2] {
        [
            [
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(INV_SQRT2, 0.0),
            ],
            [
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(-INV_SQRT2, 0.0),
            ],
        ]
    }

    #[test]
    fn test_new_state_vector() {
        let state = StateVector::new(3).unwrap();
        assert_eq!(state.num_qubits(), 3);
        assert_eq!(state.dimension(), 8);

        // Should be |000⟩
        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
        for amp in &state.amplitudes()[1..] {
            assert_eq!(*amp, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_qubit_count_bounds() {
        assert_eq!(
            StateVector::new(0),
            Err(StateError::UnsupportedQubitCount { num_qubits: 0 })
        );
        assert_eq!(
            StateVector::new(31),
            Err(StateError::UnsupportedQubitCount { num_qubits: 31 })
        );
        assert!(StateVector::new(1).is_ok());
    }

    #[test]
    fn test_state_vector_equality() {
        // Result comparisons in this module need StateVector: PartialEq.
        let a = StateVector::new(2).unwrap();
        let b = StateVector::new(2).unwrap();
        assert_eq!(a, b);

        let mut c = StateVector::new(2).unwrap();
        c.apply_single_qubit(&hadamard(), 0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_amplitudes() {
        let amplitudes = vec![Complex64::new(0.5, 0.0); 4];
        let state = StateVector::from_amplitudes(2, &amplitudes).unwrap();
        assert_eq!(state.amplitudes(), amplitudes.as_slice());
    }

    #[test]
    fn test_from_amplitudes_dimension_mismatch() {
        let amplitudes = vec![Complex64::new(1.0, 0.0)];
        let result = StateVector::from_amplitudes(2, &amplitudes);
        assert_eq!(
            result,
            Err(StateError::DimensionMismatch {
                expected: 4,
                actual: 1
            })
        );
    }

    #[test]
    fn test_norm_and_normalize() {
        let amplitudes = vec![Complex64::new(1.0, 0.0); 4];
        let mut state = StateVector::from_amplitudes(2, &amplitudes).unwrap();
        assert_relative_eq!(state.norm(), 2.0, epsilon = 1e-10);

        state.normalize();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-10);
        assert!(state.is_normalized(1e-10));
    }

    #[test]
    #[should_panic(expected = "zero-norm")]
    fn test_normalize_zero_state_panics() {
        let amplitudes = vec![Complex64::new(0.0, 0.0); 4];
        let mut state = StateVector::from_amplitudes(2, &amplitudes).unwrap();
        state.normalize();
    }

    #[test]
    fn test_apply_single_qubit_hadamard() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_single_qubit(&hadamard(), 0);

        assert_relative_eq!(state.amplitudes()[0].re, INV_SQRT2, epsilon = 1e-10);
        assert_relative_eq!(state.amplitudes()[1].re, INV_SQRT2, epsilon = 1e-10);
        assert!(state.is_normalized(1e-10));
    }

    #[test]
    fn test_double_hadamard_is_identity() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_single_qubit(&hadamard(), 1);
        state.apply_single_qubit(&hadamard(), 1);

        assert_relative_eq!(state.amplitudes()[0].re, 1.0, epsilon = 1e-10);
        for amp in &state.amplitudes()[1..] {
            assert_relative_eq!(amp.norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_probabilities() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_single_qubit(&hadamard(), 0);

        let probs = state.probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-10);
        assert_relative_eq!(probs[1], 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_reset() {
        let mut state = StateVector::new(2).unwrap();
        state.apply_single_qubit(&hadamard(), 0);
        state.apply_single_qubit(&hadamard(), 1);
        state.reset();

        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
        for amp in &state.amplitudes()[1..] {
            assert_eq!(*amp, Complex64::new(0.0, 0.0));
        }
    }
}
