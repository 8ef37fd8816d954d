//! Distances between continuous sequences.

use crate::error::{AnomalyError, Result};

/// Euclidean (L2) distance between equal-length sequences.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(AnomalyError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// Dynamic Time Warping distance with absolute-difference cost.
///
/// Sequences may differ in length. Returns infinity if either is empty.
pub fn dtw_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    let m = b.len();

    // Two rolling rows of the (n + 1) x (m + 1) cost matrix.
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for &x in a {
        curr[0] = f64::INFINITY;
        for j in 1..=m {
            let cost = (x - b[j - 1]).abs();
            curr[j] = cost + prev[j].min(curr[j - 1]).min(prev[j - 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}
