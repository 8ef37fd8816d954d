//! Pointwise maximum and minimum.

use super::{covered, Aggregator};

/// Keeps the largest score covering each index; uncovered indices stay 0.
///
/// NaN scores never replace the current value.
#[derive(Debug, Clone, Default)]
pub struct MaxAggregator {
    scores: Vec<f64>,
}

impl MaxAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MaxAggregator {
    fn init(&mut self, length: usize) {
        self.scores = vec![0.0; length];
    }

    fn add_score(&mut self, score: f64, start: usize, end: usize) {
        if let Some(range) = covered(start, end, self.scores.len()) {
            for current in &mut self.scores[range] {
                if *current < score {
                    *current = score;
                }
            }
        }
    }

    fn aggregated_scores(&self) -> Vec<f64> {
        self.scores.clone()
    }

    fn name(&self) -> &str {
        "max"
    }
}

/// Keeps the smallest score covering each index; uncovered indices stay `+inf`.
///
/// NaN scores never replace the current value.
#[derive(Debug, Clone, Default)]
pub struct MinAggregator {
    scores: Vec<f64>,
}

impl MinAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for MinAggregator {
    fn init(&mut self, length: usize) {
        self.scores = vec![f64::INFINITY; length];
    }

    fn add_score(&mut self, score: f64, start: usize, end: usize) {
        if let Some(range) = covered(start, end, self.scores.len()) {
            for current in &mut self.scores[range] {
                if score < *current {
                    *current = score;
                }
            }
        }
    }

    fn aggregated_scores(&self) -> Vec<f64> {
        self.scores.clone()
    }

    fn name(&self) -> &str {
        "min"
    }
}
