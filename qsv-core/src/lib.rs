//! Circuit engine for the qsv state-vector simulator
//!
//! This crate ties the gate matrices ([`qsv_gates`]) and the amplitude buffer
//! ([`qsv_state`]) together into [`QuantumCircuit`]: an eagerly evaluated
//! circuit with a full gate API, probabilistic measurement, shot sampling and
//! an optional stochastic noise model.
//!
//! # Example
//!
//! ```
//! use qsv_core::QuantumCircuit;
//!
//! let mut circuit = QuantumCircuit::with_seed(2, 42).unwrap();
//! circuit.bell(0, 1).unwrap();
//!
//! let counts = circuit.sample(1000).unwrap();
//! assert_eq!(counts.get("01") + counts.get("10"), 0);
//! assert_eq!(counts.get("00") + counts.get("11"), 1000);
//! ```

pub mod circuit;
pub mod error;
pub mod noise;
pub mod op;
pub mod result;

pub use circuit::QuantumCircuit;
pub use error::{QuantumError, Result};
pub use noise::NoiseModel;
pub use op::GateOp;
pub use result::{MeasurementCounts, RunResult};
