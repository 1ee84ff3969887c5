//! Dense quantum state storage and gate-application kernels
//!
//! This crate owns the exponential part of the simulator: a [`StateVector`] of
//! 2^n complex amplitudes and the O(2^n) kernels that sweep it. Bit `q` of a
//! basis index encodes the classical value of qubit `q`, so kernels work by
//! masking and pairing indices that differ in a single bit.
//!
//! Everything here is single-threaded and synchronous; the only mutable buffer
//! is the one owned by the `StateVector` instance being operated on.

pub mod error;
pub mod kernels;
pub mod state_vector;

pub use error::{Result, StateError};
pub use state_vector::StateVector;

/// Largest supported register size. 30 qubits already means a 2^30-entry
/// amplitude buffer (16 GiB of `Complex64`), so construction rejects anything
/// beyond this.
pub const MAX_QUBITS: usize = 30;
