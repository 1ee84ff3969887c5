//! Gate matrix library for the qsv simulator
//!
//! Standard single-qubit gates are precomputed `[[Complex64; 2]; 2]` constants;
//! rotation and phase gates are pure functions of their angle. The engine in
//! `qsv-core` consumes these matrices directly — this crate knows nothing about
//! state vectors or qubit indices.

pub mod matrices;

pub use matrices::{
    phase, rotation_x, rotation_y, rotation_z, u3, HADAMARD, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z,
    S_GATE, S_GATE_DAGGER, T_GATE, T_GATE_DAGGER,
};

/// A 2×2 complex matrix — the unitary of every single-qubit gate.
pub type Matrix2 = [[num_complex::Complex64; 2]; 2];
