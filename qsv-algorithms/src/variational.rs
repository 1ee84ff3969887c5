//! Variational circuit builders: VQE ansatz and QAOA layers

use qsv_core::{QuantumCircuit, QuantumError, Result};

/// Build a hardware-efficient VQE ansatz
///
/// Each of the `layers` blocks applies RY and RZ rotations to every qubit
/// (two parameters per qubit per layer) followed by a linear CX entangler
/// chain; a final RY layer (one parameter per qubit) closes the circuit.
/// `params` must therefore hold exactly `layers · 2 · n + n` angles, consumed
/// in qubit order within each sub-layer.
///
/// # Errors
/// Returns [`QuantumError::InvalidParamCount`] for a mismatched parameter
/// slice.
pub fn vqe_ansatz(num_qubits: usize, params: &[f64], layers: usize) -> Result<QuantumCircuit> {
    let expected = layers * 2 * num_qubits + num_qubits;
    if params.len() != expected {
        return Err(QuantumError::InvalidParamCount {
            expected,
            actual: params.len(),
        });
    }

    let mut circuit = QuantumCircuit::new(num_qubits)?;
    let mut next = params.iter().copied();

    for _ in 0..layers {
        for q in 0..num_qubits {
            // Iterator length was checked up front; these never run dry.
            let theta_y = next.next().unwrap_or(0.0);
            let theta_z = next.next().unwrap_or(0.0);
            circuit.ry(q, theta_y)?;
            circuit.rz(q, theta_z)?;
        }
        for q in 0..num_qubits.saturating_sub(1) {
            circuit.cx(q, q + 1)?;
        }
    }

    for q in 0..num_qubits {
        let theta = next.next().unwrap_or(0.0);
        circuit.ry(q, theta)?;
    }

    Ok(circuit)
}

/// Build one QAOA layer for a graph cost Hamiltonian
///
/// Uniform superposition, then a ZZ cost term per `edges` entry realized as
/// `cx(a, b); rz(b, 2γ); cx(a, b)`, then an `rx(2β)` mixer on every qubit.
///
/// # Errors
/// Rejects out-of-range or self-loop edges through the underlying gate calls.
pub fn qaoa_layer(
    num_qubits: usize,
    gamma: f64,
    beta: f64,
    edges: &[(usize, usize)],
) -> Result<QuantumCircuit> {
    let mut circuit = QuantumCircuit::new(num_qubits)?;

    for q in 0..num_qubits {
        circuit.h(q)?;
    }

    for &(a, b) in edges {
        circuit.cx(a, b)?;
        circuit.rz(b, 2.0 * gamma)?;
        circuit.cx(a, b)?;
    }

    for q in 0..num_qubits {
        circuit.rx(q, 2.0 * beta)?;
    }

    Ok(circuit)
}
