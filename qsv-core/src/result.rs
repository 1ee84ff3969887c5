//! Sampling and run result types

use num_complex::Complex64;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Measurement outcome counts from repeated shots
///
/// Keys use the display convention of the engine: the basis index is rendered
/// as a fixed-width binary string and then character-reversed, so qubit 0 is
/// the leftmost character. External consumers (histogram renderers, hardware
/// result comparators) rely on this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MeasurementCounts {
    counts: HashMap<String, usize>,
    total_shots: usize,
}

impl MeasurementCounts {
    /// Create an empty counts table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `bitstring`
    pub fn record(&mut self, bitstring: String) {
        *self.counts.entry(bitstring).or_insert(0) += 1;
        self.total_shots += 1;
    }

    /// Count for a specific bitstring (0 if never observed)
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Empirical probability of a bitstring (count / shots)
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.get(bitstring) as f64 / self.total_shots as f64
        }
    }

    /// Total number of shots recorded
    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// Number of distinct outcomes observed
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// The raw counts map
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Most frequently observed outcome
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(bs, &count)| (bs.as_str(), count))
    }

    /// Outcomes sorted by frequency, descending
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self
            .counts
            .iter()
            .map(|(bs, &count)| (bs.as_str(), count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        sorted
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement counts ({} shots):", self.total_shots)?;

        let sorted = self.sorted();
        for (bitstring, count) in sorted.iter().take(10) {
            let prob = *count as f64 / self.total_shots.max(1) as f64;
            writeln!(f, "  {}: {} ({:.2}%)", bitstring, count, prob * 100.0)?;
        }
        if sorted.len() > 10 {
            writeln!(f, "  ... and {} more outcomes", sorted.len() - 10)?;
        }
        Ok(())
    }
}

/// Everything a local `run(shots)` produces
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Sampled outcome histogram
    pub counts: MeasurementCounts,

    /// Exact nonzero basis-state probabilities, keyed like `counts`
    pub probabilities: HashMap<String, f64>,

    /// Snapshot of the final state vector
    pub state_vector: Vec<Complex64>,

    /// Number of shots sampled
    pub shots: usize,

    /// Wall-clock time spent sampling
    pub execution_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_and_get() {
        let mut counts = MeasurementCounts::new();
        for _ in 0..60 {
            counts.record("00".to_string());
        }
        for _ in 0..40 {
            counts.record("11".to_string());
        }

        assert_eq!(counts.total_shots(), 100);
        assert_eq!(counts.get("00"), 60);
        assert_eq!(counts.get("11"), 40);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.num_outcomes(), 2);
    }

    #[test]
    fn test_probability() {
        let mut counts = MeasurementCounts::new();
        counts.record("0".to_string());
        counts.record("1".to_string());
        counts.record("1".to_string());
        counts.record("1".to_string());

        assert_relative_eq!(counts.probability("1"), 0.75);
        assert_relative_eq!(counts.probability("0"), 0.25);
        assert_relative_eq!(counts.probability("missing"), 0.0);
    }

    #[test]
    fn test_empty_counts_probability_is_zero() {
        let counts = MeasurementCounts::new();
        assert_eq!(counts.probability("0"), 0.0);
        assert_eq!(counts.most_common(), None);
    }

    #[test]
    fn test_most_common_and_sorted() {
        let mut counts = MeasurementCounts::new();
        for _ in 0..10 {
            counts.record("01".to_string());
        }
        for _ in 0..30 {
            counts.record("10".to_string());
        }
        for _ in 0..20 {
            counts.record("00".to_string());
        }

        assert_eq!(counts.most_common(), Some(("10", 30)));

        let sorted = counts.sorted();
        assert_eq!(sorted[0], ("10", 30));
        assert_eq!(sorted[1], ("00", 20));
        assert_eq!(sorted[2], ("01", 10));
    }

    #[test]
    fn test_display_lists_outcomes() {
        let mut counts = MeasurementCounts::new();
        counts.record("00".to_string());
        counts.record("11".to_string());

        let rendered = format!("{}", counts);
        assert!(rendered.contains("2 shots"));
        assert!(rendered.contains("00"));
        assert!(rendered.contains("11"));
    }
}
