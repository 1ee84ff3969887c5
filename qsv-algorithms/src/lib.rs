//! Algorithm builders for the qsv simulator
//!
//! Pure functions that compose [`qsv_core::QuantumCircuit`] gate calls into
//! well-known circuits: Grover search, quantum phase estimation, a hardware-
//! efficient VQE ansatz and a QAOA cost/mixer layer. Everything here goes
//! through the public gate API; nothing reaches into engine internals.

pub mod grover;
pub mod qpe;
pub mod variational;

pub use grover::{grover, optimal_grover_iterations};
pub use qpe::qpe;
pub use variational::{qaoa_layer, vqe_ansatz};
