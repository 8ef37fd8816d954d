//! k-nearest-neighbour evaluator.
//!
//! Brute force: the distance to every reference is computed and the k-th
//! smallest is the score. Nothing is known about the distance function, so
//! no index structure is used.

use super::distances::DistanceMeasure;
use crate::core::Representation;
use crate::error::{AnomalyError, Result};

/// Scores a window by its distance to the k-th nearest reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnnEvaluator {
    k: usize,
    distance: DistanceMeasure,
}

impl KnnEvaluator {
    /// Create an evaluator. `k` must be positive.
    pub fn new(k: usize, distance: DistanceMeasure) -> Result<Self> {
        if k == 0 {
            return Err(AnomalyError::config("k", "must be a positive integer"));
        }
        Ok(Self { k, distance })
    }

    /// Number of neighbours.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Distance measure in use.
    pub fn distance(&self) -> DistanceMeasure {
        self.distance
    }

    /// Whether windows must be discretized before scoring.
    pub fn requires_symbolic_input(&self) -> bool {
        self.distance.is_discrete()
    }

    /// Distance from `window` to its k-th nearest reference.
    ///
    /// Returns NaN when the reference set holds fewer than `k` entries.
    pub fn evaluate(&self, window: &Representation, references: &[Representation]) -> Result<f64> {
        if references.len() < self.k {
            return Ok(f64::NAN);
        }

        let mut distances = self.distance.distances(window, references)?;
        let (_, kth, _) = distances.select_nth_unstable_by(self.k - 1, |a, b| a.total_cmp(b));
        Ok(*kth)
    }
}
