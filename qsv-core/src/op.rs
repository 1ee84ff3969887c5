//! The operation log record
//!
//! Every public gate call on [`crate::QuantumCircuit`] appends exactly one
//! [`GateOp`]. The log is what serialization boundaries (QASM exporters,
//! circuit drawers, cloud adapters) consume; the engine never replays it to
//! reconstruct amplitudes. Measurements and noise-injected Pauli errors are
//! not logged.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One recorded gate application
///
/// A tagged variant per gate keeps exporters exhaustive at compile time
/// instead of pattern-matching on loosely typed name/params maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "lowercase")]
pub enum GateOp {
    H { qubit: usize },
    X { qubit: usize },
    Y { qubit: usize },
    Z { qubit: usize },
    S { qubit: usize },
    Sdg { qubit: usize },
    T { qubit: usize },
    Tdg { qubit: usize },
    Rx { qubit: usize, theta: f64 },
    Ry { qubit: usize, theta: f64 },
    Rz { qubit: usize, theta: f64 },
    P { qubit: usize, phi: f64 },
    U { qubit: usize, theta: f64, phi: f64, lambda: f64 },
    Cx { control: usize, target: usize },
    Cy { control: usize, target: usize },
    Cz { a: usize, b: usize },
    Swap { a: usize, b: usize },
    Iswap { a: usize, b: usize },
    Cp { control: usize, target: usize, phi: f64 },
    Crx { control: usize, target: usize, theta: f64 },
    Cry { control: usize, target: usize, theta: f64 },
    Crz { control: usize, target: usize, theta: f64 },
    Ccx { control1: usize, control2: usize, target: usize },
    Ccz { a: usize, b: usize, c: usize },
    Cswap { control: usize, a: usize, b: usize },
    Mcx { controls: Vec<usize>, target: usize },
}

impl GateOp {
    /// Lowercase gate mnemonic, matching the engine method name
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::H { .. } => "h",
            GateOp::X { .. } => "x",
            GateOp::Y { .. } => "y",
            GateOp::Z { .. } => "z",
            GateOp::S { .. } => "s",
            GateOp::Sdg { .. } => "sdg",
            GateOp::T { .. } => "t",
            GateOp::Tdg { .. } => "tdg",
            GateOp::Rx { .. } => "rx",
            GateOp::Ry { .. } => "ry",
            GateOp::Rz { .. } => "rz",
            GateOp::P { .. } => "p",
            GateOp::U { .. } => "u",
            GateOp::Cx { .. } => "cx",
            GateOp::Cy { .. } => "cy",
            GateOp::Cz { .. } => "cz",
            GateOp::Swap { .. } => "swap",
            GateOp::Iswap { .. } => "iswap",
            GateOp::Cp { .. } => "cp",
            GateOp::Crx { .. } => "crx",
            GateOp::Cry { .. } => "cry",
            GateOp::Crz { .. } => "crz",
            GateOp::Ccx { .. } => "ccx",
            GateOp::Ccz { .. } => "ccz",
            GateOp::Cswap { .. } => "cswap",
            GateOp::Mcx { .. } => "mcx",
        }
    }

    /// Qubit indices in the order the gate lists them
    pub fn qubits(&self) -> SmallVec<[usize; 3]> {
        match self {
            GateOp::H { qubit }
            | GateOp::X { qubit }
            | GateOp::Y { qubit }
            | GateOp::Z { qubit }
            | GateOp::S { qubit }
            | GateOp::Sdg { qubit }
            | GateOp::T { qubit }
            | GateOp::Tdg { qubit }
            | GateOp::Rx { qubit, .. }
            | GateOp::Ry { qubit, .. }
            | GateOp::Rz { qubit, .. }
            | GateOp::P { qubit, .. }
            | GateOp::U { qubit, .. } => SmallVec::from_slice(&[*qubit]),
            GateOp::Cx { control, target }
            | GateOp::Cy { control, target }
            | GateOp::Cp { control, target, .. }
            | GateOp::Crx { control, target, .. }
            | GateOp::Cry { control, target, .. }
            | GateOp::Crz { control, target, .. } => SmallVec::from_slice(&[*control, *target]),
            GateOp::Cz { a, b } | GateOp::Swap { a, b } | GateOp::Iswap { a, b } => {
                SmallVec::from_slice(&[*a, *b])
            }
            GateOp::Ccx {
                control1,
                control2,
                target,
            } => SmallVec::from_slice(&[*control1, *control2, *target]),
            GateOp::Ccz { a, b, c } => SmallVec::from_slice(&[*a, *b, *c]),
            GateOp::Cswap { control, a, b } => SmallVec::from_slice(&[*control, *a, *b]),
            GateOp::Mcx { controls, target } => {
                let mut qubits: SmallVec<[usize; 3]> = SmallVec::from_slice(controls);
                qubits.push(*target);
                qubits
            }
        }
    }

    /// Angle parameters, empty for fixed gates
    pub fn params(&self) -> SmallVec<[f64; 3]> {
        match self {
            GateOp::Rx { theta, .. }
            | GateOp::Ry { theta, .. }
            | GateOp::Rz { theta, .. }
            | GateOp::Crx { theta, .. }
            | GateOp::Cry { theta, .. }
            | GateOp::Crz { theta, .. } => SmallVec::from_slice(&[*theta]),
            GateOp::P { phi, .. } | GateOp::Cp { phi, .. } => SmallVec::from_slice(&[*phi]),
            GateOp::U {
                theta, phi, lambda, ..
            } => SmallVec::from_slice(&[*theta, *phi, *lambda]),
            _ => SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_qubits() {
        let op = GateOp::Cx {
            control: 0,
            target: 1,
        };
        assert_eq!(op.name(), "cx");
        assert_eq!(op.qubits().as_slice(), &[0, 1]);
        assert!(op.params().is_empty());
    }

    #[test]
    fn test_params_for_parametrized_gates() {
        let op = GateOp::Rx {
            qubit: 2,
            theta: 0.5,
        };
        assert_eq!(op.params().as_slice(), &[0.5]);

        let op = GateOp::U {
            qubit: 0,
            theta: 0.1,
            phi: 0.2,
            lambda: 0.3,
        };
        assert_eq!(op.params().as_slice(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_mcx_qubit_order() {
        let op = GateOp::Mcx {
            controls: vec![0, 1, 2],
            target: 3,
        };
        assert_eq!(op.qubits().as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_serde_round_trip() {
        let ops = vec![
            GateOp::H { qubit: 0 },
            GateOp::Cp {
                control: 1,
                target: 0,
                phi: std::f64::consts::FRAC_PI_2,
            },
            GateOp::Mcx {
                controls: vec![0, 1],
                target: 2,
            },
        ];

        let json = serde_json::to_string(&ops).unwrap();
        let parsed: Vec<GateOp> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ops);
    }

    #[test]
    fn test_json_carries_gate_tag() {
        let json = serde_json::to_string(&GateOp::H { qubit: 3 }).unwrap();
        assert!(json.contains("\"gate\":\"h\""));
        assert!(json.contains("\"qubit\":3"));
    }
}
