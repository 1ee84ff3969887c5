//! Grover's search algorithm

use qsv_core::{QuantumCircuit, Result};
use std::f64::consts::FRAC_PI_4;

/// Optimal Grover iteration count for an `num_qubits`-qubit search space
///
/// `floor(π/4 · √2^n)`, clamped to at least one iteration. The floor matters:
/// rounding up over-rotates past the marked state and can land *below* the
/// uniform-superposition probability for small registers.
pub fn optimal_grover_iterations(num_qubits: usize) -> usize {
    let dimension = (1u64 << num_qubits) as f64;
    let optimal = (FRAC_PI_4 * dimension.sqrt()).floor() as usize;
    optimal.max(1)
}

/// Build a Grover search circuit
///
/// Prepares the uniform superposition, then alternates the caller's phase
/// `oracle` with the diffusion operator for `iterations` rounds (or the
/// optimal count when `None`). The oracle must flip the sign of the marked
/// basis state(s) using public gate calls, e.g. `cz` sandwiched by `x` gates.
///
/// # Errors
/// Propagates any gate error raised by the oracle or the register size check.
///
/// # Example
///
/// ```
/// use qsv_algorithms::grover;
///
/// // Mark |11⟩ on two qubits.
/// let circuit = grover(2, |c| c.cz(0, 1).map(|_| ()), None).unwrap();
/// assert!(circuit.probabilities()[3] > 0.9);
/// ```
pub fn grover<F>(num_qubits: usize, mut oracle: F, iterations: Option<usize>) -> Result<QuantumCircuit>
where
    F: FnMut(&mut QuantumCircuit) -> Result<()>,
{
    let mut circuit = QuantumCircuit::new(num_qubits)?;
    let rounds = iterations.unwrap_or_else(|| optimal_grover_iterations(num_qubits));

    for q in 0..num_qubits {
        circuit.h(q)?;
    }

    for _ in 0..rounds {
        oracle(&mut circuit)?;
        diffusion(&mut circuit)?;
    }

    Ok(circuit)
}

/// Inversion about the mean: H / X layers around a multi-controlled Z, with
/// the MCZ realized as an `mcx` sandwiched by Hadamards on the last qubit.
fn diffusion(circuit: &mut QuantumCircuit) -> Result<()> {
    let n = circuit.num_qubits();
    for q in 0..n {
        circuit.h(q)?;
    }
    for q in 0..n {
        circuit.x(q)?;
    }

    let controls: Vec<usize> = (0..n - 1).collect();
    circuit.h(n - 1)?;
    circuit.mcx(&controls, n - 1)?;
    circuit.h(n - 1)?;

    for q in 0..n {
        circuit.x(q)?;
    }
    for q in 0..n {
        circuit.h(q)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_iterations() {
        assert_eq!(optimal_grover_iterations(1), 1);
        assert_eq!(optimal_grover_iterations(2), 1);
        assert_eq!(optimal_grover_iterations(3), 2);
        assert_eq!(optimal_grover_iterations(4), 3);
    }

    #[test]
    fn test_two_qubit_search_finds_marked_state() {
        // cz marks |11⟩; one iteration amplifies it to certainty.
        let circuit = grover(2, |c| c.cz(0, 1).map(|_| ()), None).unwrap();
        assert!(circuit.probabilities()[0b11] > 0.9);
    }

    #[test]
    fn test_marked_state_other_than_all_ones() {
        // X conjugation retargets the phase flip at |01⟩ (qubit 0 set).
        let oracle = |c: &mut QuantumCircuit| {
            c.x(1)?;
            c.cz(0, 1)?;
            c.x(1)?;
            Ok(())
        };
        let circuit = grover(2, oracle, None).unwrap();
        assert!(circuit.probabilities()[0b01] > 0.9);
    }

    #[test]
    fn test_three_qubit_search() {
        let oracle = |c: &mut QuantumCircuit| c.ccz(0, 1, 2).map(|_| ());
        let circuit = grover(3, oracle, None).unwrap();

        let probs = circuit.probabilities();
        assert!(probs[0b111] > 0.9, "got {}", probs[0b111]);
    }

    #[test]
    fn test_explicit_iteration_override() {
        // Zero iterations leaves the uniform superposition untouched.
        let circuit = grover(2, |c| c.cz(0, 1).map(|_| ()), Some(0)).unwrap();
        for p in circuit.probabilities() {
            assert!((p - 0.25).abs() < 1e-10);
        }
    }

    #[test]
    fn test_oracle_errors_propagate() {
        let result = grover(2, |c| c.cz(0, 7).map(|_| ()), None);
        assert!(result.is_err());
    }
}
