//! Simple stochastic noise model
//!
//! Two channels, both drawn from the circuit's own RNG so runs stay
//! reproducible under a fixed seed:
//!
//! - **Depolarizing**: after each single-qubit gate, with the configured
//!   probability a uniformly chosen Pauli (X, Y or Z) is applied to the same
//!   qubit. Known limitation, preserved from the reference semantics:
//!   two- and three-qubit gates do not trigger this channel.
//! - **Readout**: during measurement the outcome probability is blended,
//!   `p1' = p1·(1−r) + (1−p1)·r`, before the draw. The collapse then follows
//!   the blended draw, so a flipped readout of a near-deterministic qubit can
//!   leave a degenerate (zero) post-measurement state — an artifact of this
//!   simplified channel rather than a faithful readout-error model.

use crate::error::{QuantumError, Result};

/// Per-circuit noise configuration
///
/// Attached wholesale via [`crate::QuantumCircuit::set_noise_model`]; setting a
/// new model replaces the previous one entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoiseModel {
    depolarizing: Option<f64>,
    readout: Option<f64>,
}

impl NoiseModel {
    /// Create an empty (noiseless) model
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depolarizing error probability
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidProbability`] if `p` is not in [0, 1].
    pub fn with_depolarizing(mut self, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(QuantumError::InvalidProbability(p));
        }
        self.depolarizing = Some(p);
        Ok(self)
    }

    /// Set the readout error probability
    ///
    /// # Errors
    /// Returns [`QuantumError::InvalidProbability`] if `p` is not in [0, 1].
    pub fn with_readout(mut self, p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(QuantumError::InvalidProbability(p));
        }
        self.readout = Some(p);
        Ok(self)
    }

    /// Depolarizing probability, if configured
    #[inline]
    pub fn depolarizing(&self) -> Option<f64> {
        self.depolarizing
    }

    /// Readout error probability, if configured
    #[inline]
    pub fn readout(&self) -> Option<f64> {
        self.readout
    }

    /// Whether any channel is configured
    pub fn has_noise(&self) -> bool {
        self.depolarizing.is_some() || self.readout.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model() {
        let model = NoiseModel::new();
        assert!(!model.has_noise());
        assert_eq!(model.depolarizing(), None);
        assert_eq!(model.readout(), None);
    }

    #[test]
    fn test_builder() {
        let model = NoiseModel::new()
            .with_depolarizing(0.01)
            .unwrap()
            .with_readout(0.05)
            .unwrap();
        assert!(model.has_noise());
        assert_eq!(model.depolarizing(), Some(0.01));
        assert_eq!(model.readout(), Some(0.05));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            NoiseModel::new().with_depolarizing(1.5),
            Err(QuantumError::InvalidProbability(1.5))
        );
        assert_eq!(
            NoiseModel::new().with_readout(-0.1),
            Err(QuantumError::InvalidProbability(-0.1))
        );
    }

    #[test]
    fn test_boundary_probabilities_allowed() {
        assert!(NoiseModel::new().with_depolarizing(0.0).is_ok());
        assert!(NoiseModel::new().with_readout(1.0).is_ok());
    }
}
