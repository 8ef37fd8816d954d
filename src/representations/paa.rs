//! Piecewise Aggregate Approximation.

use crate::error::{AnomalyError, Result};

/// Reduce `series` to `target_dimension` segment averages.
///
/// Samples straddling a segment boundary contribute to both segments in
/// proportion to their overlap, so the original length does not need to be
/// a multiple of the target. Returns the input unchanged when the dimensions
/// are equal.
pub fn paa(series: &[f64], target_dimension: usize) -> Result<Vec<f64>> {
    let original = series.len();
    if target_dimension == original {
        return Ok(series.to_vec());
    }
    if target_dimension > original {
        return Err(AnomalyError::Dimension {
            target: target_dimension,
            original,
        });
    }
    if target_dimension == 0 {
        return Err(AnomalyError::config("dimensions", "must be a positive integer"));
    }

    // Work on a grid of original * target cells: sample i spans
    // [i * target, (i + 1) * target), segment j spans [j * original, (j + 1) * original).
    let mut result = vec![0.0; target_dimension];
    for (i, &x) in series.iter().enumerate() {
        let lo = i * target_dimension;
        let hi = lo + target_dimension;
        let first = lo / original;
        let last = (hi - 1) / original;
        for (j, segment) in result.iter_mut().enumerate().take(last + 1).skip(first) {
            let seg_lo = j * original;
            let seg_hi = seg_lo + original;
            let overlap = hi.min(seg_hi) - lo.max(seg_lo);
            *segment += x * overlap as f64;
        }
    }

    for segment in result.iter_mut() {
        *segment /= original as f64;
    }

    Ok(result)
}
