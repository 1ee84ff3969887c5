//! The state-vector circuit engine
//!
//! [`QuantumCircuit`] owns the amplitude buffer, the operation log and the
//! RNG. Gates apply eagerly: each method validates its indices, appends one
//! [`GateOp`] record and sweeps the state vector, returning `&mut Self` for
//! chaining.

use crate::error::{QuantumError, Result};
use crate::noise::NoiseModel;
use crate::op::GateOp;
use crate::result::{MeasurementCounts, RunResult};
use num_complex::Complex64;
use qsv_gates::{matrices, Matrix2};
use qsv_state::{kernels, StateVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::time::Instant;

/// Dense state-vector simulator for one qubit register
///
/// The engine has two observable regimes: coherent evolution (any gate call is
/// valid) and partial collapse after a [`measure_qubit`](Self::measure_qubit)
/// call, where the measured qubit is pinned to a classical value but further
/// gates remain legal. [`reset`](Self::reset) returns to |0…0⟩ from anywhere.
///
/// # Example
///
/// ```
/// use qsv_core::QuantumCircuit;
///
/// let mut circuit = QuantumCircuit::with_seed(2, 7).unwrap();
/// circuit.h(0).unwrap().cx(0, 1).unwrap();
///
/// let probs = circuit.probabilities();
/// assert!((probs[0] - 0.5).abs() < 1e-10);
/// assert!((probs[3] - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct QuantumCircuit {
    state: StateVector,
    ops: Vec<GateOp>,
    classical: Vec<u8>,
    noise: Option<NoiseModel>,
    rng: StdRng,
}

impl QuantumCircuit {
    /// Create a circuit of `num_qubits` qubits in |0…0⟩ with an entropy-seeded
    /// RNG
    ///
    /// # Errors
    /// Returns a configuration error unless `1 <= num_qubits <= 30`.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_rng(num_qubits, StdRng::from_entropy())
    }

    /// Create a circuit with a deterministic RNG seed
    ///
    /// Two circuits built with the same seed and the same call sequence
    /// produce bit-identical measurement outcomes, noise events and samples.
    pub fn with_seed(num_qubits: usize, seed: u64) -> Result<Self> {
        Self::with_rng(num_qubits, StdRng::seed_from_u64(seed))
    }

    fn with_rng(num_qubits: usize, rng: StdRng) -> Result<Self> {
        let state = StateVector::new(num_qubits)?;
        Ok(Self {
            classical: vec![0; num_qubits],
            state,
            ops: Vec::new(),
            noise: None,
            rng,
        })
    }

    /// Number of qubits in the register
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Read-only view of the operation log, in application order
    #[inline]
    pub fn operations(&self) -> &[GateOp] {
        &self.ops
    }

    /// Read-only view of the current amplitudes
    #[inline]
    pub fn state_vector(&self) -> &[Complex64] {
        self.state.amplitudes()
    }

    /// Most recent measurement outcome per qubit (0 until first measured)
    #[inline]
    pub fn classical_bits(&self) -> &[u8] {
        &self.classical
    }

    /// Currently attached noise model, if any
    #[inline]
    pub fn noise_model(&self) -> Option<&NoiseModel> {
        self.noise.as_ref()
    }

    /// Attach a noise model, replacing any previous one wholesale
    pub fn set_noise_model(&mut self, model: NoiseModel) -> &mut Self {
        self.noise = Some(model);
        self
    }

    /// Remove the noise model
    pub fn clear_noise_model(&mut self) -> &mut Self {
        self.noise = None;
        self
    }

    /// Return to |0…0⟩: clears amplitudes, the operation log and classical bits
    pub fn reset(&mut self) -> &mut Self {
        self.state.reset();
        self.ops.clear();
        self.classical.fill(0);
        self
    }

    // ---- validation -------------------------------------------------------

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits() {
            return Err(QuantumError::InvalidQubit(qubit, self.num_qubits()));
        }
        Ok(())
    }

    fn check_distinct(&self, qubits: &[usize]) -> Result<()> {
        for (i, &q) in qubits.iter().enumerate() {
            self.check_qubit(q)?;
            if qubits[..i].contains(&q) {
                return Err(QuantumError::DuplicateQubit(q));
            }
        }
        Ok(())
    }

    // ---- single-qubit gates ----------------------------------------------

    /// Sweep one qubit with a 2×2 matrix, then fire the depolarizing channel
    /// if one is configured.
    fn apply_single(&mut self, qubit: usize, matrix: &Matrix2) {
        self.state.apply_single_qubit(matrix, qubit);

        if let Some(p) = self.noise.and_then(|m| m.depolarizing()) {
            if self.rng.gen::<f64>() < p {
                let pauli = match self.rng.gen_range(0..3u8) {
                    0 => &matrices::PAULI_X,
                    1 => &matrices::PAULI_Y,
                    _ => &matrices::PAULI_Z,
                };
                // Error channel, not a circuit operation: not logged.
                self.state.apply_single_qubit(pauli, qubit);
            }
        }
    }

    /// Hadamard gate
    pub fn h(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::H { qubit });
        self.apply_single(qubit, &matrices::HADAMARD);
        Ok(self)
    }

    /// Pauli-X (NOT) gate
    pub fn x(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::X { qubit });
        self.apply_single(qubit, &matrices::PAULI_X);
        Ok(self)
    }

    /// Pauli-Y gate
    pub fn y(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Y { qubit });
        self.apply_single(qubit, &matrices::PAULI_Y);
        Ok(self)
    }

    /// Pauli-Z gate
    pub fn z(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Z { qubit });
        self.apply_single(qubit, &matrices::PAULI_Z);
        Ok(self)
    }

    /// S gate (√Z)
    pub fn s(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::S { qubit });
        self.apply_single(qubit, &matrices::S_GATE);
        Ok(self)
    }

    /// S† gate
    pub fn sdg(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Sdg { qubit });
        self.apply_single(qubit, &matrices::S_GATE_DAGGER);
        Ok(self)
    }

    /// T gate (π/8)
    pub fn t(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::T { qubit });
        self.apply_single(qubit, &matrices::T_GATE);
        Ok(self)
    }

    /// T† gate
    pub fn tdg(&mut self, qubit: usize) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Tdg { qubit });
        self.apply_single(qubit, &matrices::T_GATE_DAGGER);
        Ok(self)
    }

    /// Rotation around X by `theta`
    pub fn rx(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Rx { qubit, theta });
        self.apply_single(qubit, &matrices::rotation_x(theta));
        Ok(self)
    }

    /// Rotation around Y by `theta`
    pub fn ry(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Ry { qubit, theta });
        self.apply_single(qubit, &matrices::rotation_y(theta));
        Ok(self)
    }

    /// Rotation around Z by `theta`
    pub fn rz(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Rz { qubit, theta });
        self.apply_single(qubit, &matrices::rotation_z(theta));
        Ok(self)
    }

    /// Phase gate: diag(1, e^{iφ})
    pub fn p(&mut self, qubit: usize, phi: f64) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::P { qubit, phi });
        self.apply_single(qubit, &matrices::phase(phi));
        Ok(self)
    }

    /// General single-qubit unitary U(θ, φ, λ)
    pub fn u(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) -> Result<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::U {
            qubit,
            theta,
            phi,
            lambda,
        });
        self.apply_single(qubit, &matrices::u3(theta, phi, lambda));
        Ok(self)
    }

    // ---- two-qubit gates --------------------------------------------------

    /// Controlled-NOT
    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.check_distinct(&[control, target])?;
        self.ops.push(GateOp::Cx { control, target });
        kernels::apply_controlled_x(self.state.amplitudes_mut(), 1 << control, target);
        Ok(self)
    }

    /// Controlled-Y: the symmetric two-amplitude rotation derived from the Y
    /// matrix
    pub fn cy(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.check_distinct(&[control, target])?;
        self.ops.push(GateOp::Cy { control, target });
        kernels::apply_controlled_u(
            self.state.amplitudes_mut(),
            1 << control,
            target,
            &matrices::PAULI_Y,
        );
        Ok(self)
    }

    /// Controlled-Z (symmetric in its two qubits)
    pub fn cz(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.check_distinct(&[a, b])?;
        self.ops.push(GateOp::Cz { a, b });
        kernels::apply_controlled_phase(
            self.state.amplitudes_mut(),
            (1 << a) | (1 << b),
            Complex64::new(-1.0, 0.0),
        );
        Ok(self)
    }

    /// SWAP gate
    pub fn swap(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.check_distinct(&[a, b])?;
        self.ops.push(GateOp::Swap { a, b });
        kernels::apply_swap(self.state.amplitudes_mut(), a, b);
        Ok(self)
    }

    /// iSWAP gate: swap plus a factor of i on the exchanged amplitudes
    pub fn iswap(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.check_distinct(&[a, b])?;
        self.ops.push(GateOp::Iswap { a, b });
        kernels::apply_iswap(self.state.amplitudes_mut(), a, b);
        Ok(self)
    }

    /// Controlled phase: diag(1, 1, 1, e^{iφ})
    pub fn cp(&mut self, control: usize, target: usize, phi: f64) -> Result<&mut Self> {
        self.check_distinct(&[control, target])?;
        self.ops.push(GateOp::Cp {
            control,
            target,
            phi,
        });
        kernels::apply_controlled_phase(
            self.state.amplitudes_mut(),
            (1 << control) | (1 << target),
            Complex64::from_polar(1.0, phi),
        );
        Ok(self)
    }

    /// Controlled rotation around X
    pub fn crx(&mut self, control: usize, target: usize, theta: f64) -> Result<&mut Self> {
        self.check_distinct(&[control, target])?;
        self.ops.push(GateOp::Crx {
            control,
            target,
            theta,
        });
        kernels::apply_controlled_u(
            self.state.amplitudes_mut(),
            1 << control,
            target,
            &matrices::rotation_x(theta),
        );
        Ok(self)
    }

    /// Controlled rotation around Y
    pub fn cry(&mut self, control: usize, target: usize, theta: f64) -> Result<&mut Self> {
        self.check_distinct(&[control, target])?;
        self.ops.push(GateOp::Cry {
            control,
            target,
            theta,
        });
        kernels::apply_controlled_u(
            self.state.amplitudes_mut(),
            1 << control,
            target,
            &matrices::rotation_y(theta),
        );
        Ok(self)
    }

    /// Controlled rotation around Z
    pub fn crz(&mut self, control: usize, target: usize, theta: f64) -> Result<&mut Self> {
        self.check_distinct(&[control, target])?;
        self.ops.push(GateOp::Crz {
            control,
            target,
            theta,
        });
        kernels::apply_controlled_u(
            self.state.amplitudes_mut(),
            1 << control,
            target,
            &matrices::rotation_z(theta),
        );
        Ok(self)
    }

    // ---- three-qubit and multi-controlled gates ---------------------------

    /// Toffoli (CCX) gate
    pub fn ccx(&mut self, control1: usize, control2: usize, target: usize) -> Result<&mut Self> {
        self.check_distinct(&[control1, control2, target])?;
        self.ops.push(GateOp::Ccx {
            control1,
            control2,
            target,
        });
        kernels::apply_controlled_x(
            self.state.amplitudes_mut(),
            (1 << control1) | (1 << control2),
            target,
        );
        Ok(self)
    }

    /// Doubly-controlled Z (symmetric in all three qubits)
    pub fn ccz(&mut self, a: usize, b: usize, c: usize) -> Result<&mut Self> {
        self.check_distinct(&[a, b, c])?;
        self.ops.push(GateOp::Ccz { a, b, c });
        kernels::apply_controlled_phase(
            self.state.amplitudes_mut(),
            (1 << a) | (1 << b) | (1 << c),
            Complex64::new(-1.0, 0.0),
        );
        Ok(self)
    }

    /// Fredkin (controlled-SWAP) gate
    pub fn cswap(&mut self, control: usize, a: usize, b: usize) -> Result<&mut Self> {
        self.check_distinct(&[control, a, b])?;
        self.ops.push(GateOp::Cswap { control, a, b });
        kernels::apply_cswap(self.state.amplitudes_mut(), control, a, b);
        Ok(self)
    }

    /// Multi-controlled X: flips `target` when every control is 1
    ///
    /// An empty control list degenerates to a plain X, which is what the
    /// Grover diffusion operator relies on for single-qubit registers.
    pub fn mcx(&mut self, controls: &[usize], target: usize) -> Result<&mut Self> {
        let mut qubits = controls.to_vec();
        qubits.push(target);
        self.check_distinct(&qubits)?;

        let mask = controls.iter().fold(0usize, |m, &c| m | (1 << c));
        self.ops.push(GateOp::Mcx {
            controls: controls.to_vec(),
            target,
        });
        kernels::apply_controlled_x(self.state.amplitudes_mut(), mask, target);
        Ok(self)
    }

    // ---- composite circuits ----------------------------------------------

    /// Bell pair on (`a`, `b`): H then CNOT
    pub fn bell(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.check_distinct(&[a, b])?;
        self.h(a)?.cx(a, b)
    }

    /// GHZ state across `qubits`: H on the first, then a CNOT chain
    pub fn ghz(&mut self, qubits: &[usize]) -> Result<&mut Self> {
        self.check_distinct(qubits)?;
        if qubits.len() < 2 {
            return Err(QuantumError::InvalidParamCount {
                expected: 2,
                actual: qubits.len(),
            });
        }

        self.h(qubits[0])?;
        for pair in qubits.windows(2) {
            self.cx(pair[0], pair[1])?;
        }
        Ok(self)
    }

    /// Quantum Fourier transform over the whole register
    pub fn qft(&mut self) -> Result<&mut Self> {
        let n = self.num_qubits();
        for i in 0..n {
            self.h(i)?;
            for j in (i + 1)..n {
                self.cp(j, i, PI / (1u64 << (j - i)) as f64)?;
            }
        }
        for i in 0..n / 2 {
            self.swap(i, n - 1 - i)?;
        }
        Ok(self)
    }

    /// Inverse quantum Fourier transform: exact reversal of [`qft`](Self::qft)
    pub fn iqft(&mut self) -> Result<&mut Self> {
        let n = self.num_qubits();
        for i in 0..n / 2 {
            self.swap(i, n - 1 - i)?;
        }
        for i in (0..n).rev() {
            for j in ((i + 1)..n).rev() {
                self.cp(j, i, -PI / (1u64 << (j - i)) as f64)?;
            }
            self.h(i)?;
        }
        Ok(self)
    }

    // ---- measurement ------------------------------------------------------

    /// Measure one qubit in the computational basis, collapsing the state
    ///
    /// The outcome probability is blended with the readout error (if
    /// configured) before the draw; the collapse renormalizes against that
    /// same blended probability. The result is recorded in
    /// [`classical_bits`](Self::classical_bits).
    ///
    /// # Panics
    /// Panics if the collapse would renormalize against a zero probability —
    /// an internal arithmetic failure, not a recoverable condition.
    pub fn measure_qubit(&mut self, qubit: usize) -> Result<u8> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;

        let mut prob1: f64 = self
            .state
            .amplitudes()
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        if let Some(r) = self.noise.and_then(|m| m.readout()) {
            prob1 = prob1 * (1.0 - r) + (1.0 - prob1) * r;
        }

        let outcome: u8 = if self.rng.gen::<f64>() < prob1 { 1 } else { 0 };
        self.classical[qubit] = outcome;

        let keep = if outcome == 1 { prob1 } else { 1.0 - prob1 };
        assert!(
            keep > 0.0,
            "measurement collapsed onto a zero-probability outcome"
        );
        let scale = 1.0 / keep.sqrt();

        for (i, amp) in self.state.amplitudes_mut().iter_mut().enumerate() {
            let bit = u8::from(i & mask != 0);
            if bit == outcome {
                *amp *= scale;
            } else {
                *amp = Complex64::new(0.0, 0.0);
            }
        }

        Ok(outcome)
    }

    /// Measure every qubit in ascending order
    pub fn measure_all(&mut self) -> Result<Vec<u8>> {
        (0..self.num_qubits())
            .map(|q| self.measure_qubit(q))
            .collect()
    }

    // ---- sampling ---------------------------------------------------------

    /// Basis-state probabilities |amplitude[i]|², without mutating the state
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    /// Sample `shots` measurement outcomes without collapsing the state
    ///
    /// Each shot walks the cumulative distribution with a fresh uniform draw.
    /// Keys are fixed-width binary strings with REVERSED character order, so
    /// qubit 0 is the leftmost character — the interop convention consumed by
    /// histogram renderers and hardware comparators.
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidShots`] for `shots == 0`.
    pub fn sample(&mut self, shots: usize) -> Result<MeasurementCounts> {
        if shots == 0 {
            return Err(QuantumError::InvalidShots(shots));
        }

        let probs = self.probabilities();
        let mut cumulative = Vec::with_capacity(probs.len());
        let mut acc = 0.0;
        for p in &probs {
            acc += p;
            cumulative.push(acc);
        }

        let width = self.num_qubits();
        let mut counts = MeasurementCounts::new();
        for _ in 0..shots {
            let draw = self.rng.gen::<f64>();
            let index = cumulative
                .iter()
                .position(|&c| draw < c)
                .unwrap_or(probs.len() - 1);
            counts.record(bitstring(index, width));
        }

        Ok(counts)
    }

    /// Sample `shots` outcomes and package counts, exact probabilities, the
    /// state snapshot and elapsed wall-clock time
    pub fn run(&mut self, shots: usize) -> Result<RunResult> {
        let start = Instant::now();
        let counts = self.sample(shots)?;

        let width = self.num_qubits();
        let probabilities: HashMap<String, f64> = self
            .probabilities()
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > 0.0)
            .map(|(i, &p)| (bitstring(i, width), p))
            .collect();

        Ok(RunResult {
            counts,
            probabilities,
            state_vector: self.state.amplitudes().to_vec(),
            shots,
            execution_time: start.elapsed(),
        })
    }
}

/// Fixed-width binary rendering of a basis index with reversed character
/// order: qubit 0 ends up leftmost.
fn bitstring(index: usize, width: usize) -> String {
    format!("{:0width$b}", index, width = width)
        .chars()
        .rev()
        .collect()
}
