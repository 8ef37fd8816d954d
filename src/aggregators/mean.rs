//! Running mean of covering scores.

use super::{covered, Aggregator};

/// Arithmetic mean of the scores covering each index.
///
/// Maintained incrementally as `m += (x - m) / n`; uncovered indices stay 0.
/// A NaN score makes the mean NaN from then on.
#[derive(Debug, Clone, Default)]
pub struct MeanAggregator {
    means: Vec<f64>,
    counts: Vec<usize>,
}

impl MeanAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scores folded into each index.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

impl Aggregator for MeanAggregator {
    fn init(&mut self, length: usize) {
        self.means = vec![0.0; length];
        self.counts = vec![0; length];
    }

    fn add_score(&mut self, score: f64, start: usize, end: usize) {
        if let Some(range) = covered(start, end, self.means.len()) {
            for i in range {
                self.counts[i] += 1;
                self.means[i] += (score - self.means[i]) / self.counts[i] as f64;
            }
        }
    }

    fn aggregated_scores(&self) -> Vec<f64> {
        self.means.clone()
    }

    fn name(&self) -> &str {
        "mean"
    }
}
