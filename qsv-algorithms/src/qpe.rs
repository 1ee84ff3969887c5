//! Quantum phase estimation

use qsv_core::{QuantumCircuit, Result};
use std::f64::consts::PI;

/// Build a quantum phase estimation circuit
///
/// Allocates `num_counting + 1` qubits: counting register at indices
/// `0..num_counting`, one work qubit at index `num_counting` prepared in |1⟩
/// (the eigenstate of the phase-style unitaries this estimator is typically
/// pointed at). For each counting qubit `i`, `controlled_power` must apply the
/// unitary raised to `power = 2^(m-1-i)` controlled on qubit `i`. The builder
/// finishes with an inverse QFT over the counting register only.
///
/// The counting register reads out big-endian: qubit 0 carries the most
/// significant bit of `round(phase · 2^m)`.
///
/// # Errors
/// Propagates gate errors from the closure and the register size check.
///
/// # Example
///
/// ```
/// use qsv_algorithms::qpe;
/// use std::f64::consts::FRAC_PI_4;
///
/// // Estimate the phase of P(π/4): φ = 1/8 over 3 counting qubits.
/// let circuit = qpe(3, |c, control, power| {
///     c.cp(control, 3, power as f64 * FRAC_PI_4).map(|_| ())
/// })
/// .unwrap();
///
/// // K = φ·2³ = 1, big-endian: counting qubit 2 set, work qubit set.
/// assert!(circuit.probabilities()[0b1100] > 0.99);
/// ```
pub fn qpe<F>(num_counting: usize, mut controlled_power: F) -> Result<QuantumCircuit>
where
    F: FnMut(&mut QuantumCircuit, usize, usize) -> Result<()>,
{
    let mut circuit = QuantumCircuit::new(num_counting + 1)?;
    let work = num_counting;

    circuit.x(work)?;
    for i in 0..num_counting {
        circuit.h(i)?;
    }

    for i in 0..num_counting {
        let power = 1usize << (num_counting - 1 - i);
        controlled_power(&mut circuit, i, power)?;
    }

    inverse_qft_range(&mut circuit, num_counting)?;
    Ok(circuit)
}

/// Inverse QFT over qubits `0..m`, leaving the rest of the register alone.
/// Mirrors the whole-register transform: undo the swaps, then reverse every
/// Hadamard/controlled-phase in opposite order with negated angles.
fn inverse_qft_range(circuit: &mut QuantumCircuit, m: usize) -> Result<()> {
    for i in 0..m / 2 {
        circuit.swap(i, m - 1 - i)?;
    }
    for i in (0..m).rev() {
        for j in ((i + 1)..m).rev() {
            circuit.cp(j, i, -PI / (1u64 << (j - i)) as f64)?;
        }
        circuit.h(i)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn test_exact_phase_one_eighth() {
        // U = P(π/4) on the work qubit: φ = 1/8, K = 1 over 3 counting qubits.
        let circuit = qpe(3, |c, control, power| {
            c.cp(control, 3, power as f64 * FRAC_PI_4).map(|_| ())
        })
        .unwrap();

        // Big-endian K = 001 puts the set bit on counting qubit 2;
        // the work qubit (index 3) stays in |1⟩.
        let peak = (1 << 2) | (1 << 3);
        assert!(circuit.probabilities()[peak] > 0.99);
    }

    #[test]
    fn test_exact_phase_one_half() {
        // U = P(π): φ = 1/2, K = 4 → counting qubit 0 set.
        let circuit = qpe(3, |c, control, power| {
            c.cp(control, 3, power as f64 * PI).map(|_| ())
        })
        .unwrap();

        let peak = (1 << 0) | (1 << 3);
        assert!(circuit.probabilities()[peak] > 0.99);
    }

    #[test]
    fn test_inexact_phase_peaks_at_nearest_fraction() {
        // φ = 0.3 is not an exact 3-bit fraction; the distribution still
        // peaks at K = round(0.3 · 8) = 2 → counting qubit 1 set.
        let theta = 2.0 * PI * 0.3;
        let circuit = qpe(3, |c, control, power| {
            c.cp(control, 3, power as f64 * theta).map(|_| ())
        })
        .unwrap();

        let probs = circuit.probabilities();
        let best = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        assert_eq!(best, (1 << 1) | (1 << 3));
    }

    #[test]
    fn test_zero_phase_leaves_counting_register_clear() {
        let circuit = qpe(2, |_, _, _| Ok(())).unwrap();
        // Work qubit |1⟩, counting register |00⟩.
        assert!(circuit.probabilities()[1 << 2] > 0.99);
    }

    #[test]
    fn test_closure_errors_propagate() {
        let result = qpe(2, |c, control, _| c.cx(control, 9).map(|_| ()));
        assert!(result.is_err());
    }
}
