//! Median of covering scores.

use super::{covered, Aggregator};
use crate::utils::median;

/// Median of the scores covering each index.
///
/// Scores are kept per index until [`aggregated_scores`](Aggregator::aggregated_scores)
/// is called. Uncovered indices and indices with a NaN contribution yield NaN.
#[derive(Debug, Clone, Default)]
pub struct MedianAggregator {
    scores: Vec<Vec<f64>>,
}

impl MedianAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MedianAggregator {
    fn init(&mut self, length: usize) {
        self.scores = vec![Vec::new(); length];
    }

    fn add_score(&mut self, score: f64, start: usize, end: usize) {
        if let Some(range) = covered(start, end, self.scores.len()) {
            for list in &mut self.scores[range] {
                list.push(score);
            }
        }
    }

    fn aggregated_scores(&self) -> Vec<f64> {
        self.scores.iter().map(|list| median(list)).collect()
    }

    fn name(&self) -> &str {
        "median"
    }
}
