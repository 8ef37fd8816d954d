//! Z-normalization.

use crate::utils::{mean, population_std};

/// Standard deviations below this are treated as zero.
const FLAT_TOLERANCE: f64 = 1e-10;

/// Normalize to zero empirical mean and unit empirical (population) variance.
///
/// A constant input has no defined scale and maps to all zeros.
pub fn z_normalize(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let m = mean(series);
    let std = population_std(series);

    if std < FLAT_TOLERANCE {
        return vec![0.0; series.len()];
    }

    series.iter().map(|&x| (x - m) / std).collect()
}
