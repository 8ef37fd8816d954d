//! Error measures between a binary label vector and an anomaly vector.
//!
//! The support measures threshold the anomaly vector and report the Hamming
//! distance (fraction of mismatching indices) to the labels. They differ in
//! how the threshold is chosen.
//!
//! Indices whose score is NaN or `+inf` carry no defined score (a window
//! scored against an undersized reference set, or an index only the min
//! aggregator's identity reached). They are dropped from both vectors before
//! measuring.

use crate::error::{AnomalyError, Result};

/// Labels and scores restricted to indices with a defined score.
#[derive(Debug)]
struct Defined {
    labels: Vec<bool>,
    scores: Vec<f64>,
}

/// Check lengths, reject negative scores and drop undefined ones.
fn defined_inputs(labels: &[bool], scores: &[f64]) -> Result<Defined> {
    if labels.len() != scores.len() {
        return Err(AnomalyError::LengthMismatch {
            left: labels.len(),
            right: scores.len(),
        });
    }
    if scores.is_empty() {
        return Err(AnomalyError::EmptyData);
    }
    if let Some(bad) = scores.iter().find(|&&s| s < 0.0) {
        return Err(AnomalyError::ComputationError(format!(
            "anomaly scores must be non-negative, found {bad}"
        )));
    }

    let (labels, scores): (Vec<bool>, Vec<f64>) = labels
        .iter()
        .zip(scores)
        .filter(|&(_, &s)| s.is_finite())
        .map(|(&l, &s)| (l, s))
        .unzip();
    if scores.is_empty() {
        return Err(AnomalyError::InsufficientData { needed: 1, got: 0 });
    }
    Ok(Defined { labels, scores })
}

/// Distinct scores, largest first.
fn thresholds_descending(scores: &[f64]) -> Vec<f64> {
    let mut unique = scores.to_vec();
    unique.sort_by(|a, b| b.total_cmp(a));
    unique.dedup();
    unique
}

/// Fraction of indices where `label` differs from `score >= threshold`.
fn hamming_at(labels: &[bool], scores: &[f64], threshold: f64) -> f64 {
    let mismatches = labels
        .iter()
        .zip(scores)
        .filter(|&(&l, &s)| l != (s >= threshold))
        .count();
    mismatches as f64 / labels.len() as f64
}

/// Error at the largest threshold flagging at least as many indices as are labelled.
///
/// # Example
/// ```
/// use anofox_anomaly::evaluation::equal_support;
///
/// let labels = [false, true, true, false];
/// assert_eq!(equal_support(&labels, &[0.1, 0.9, 0.8, 0.2]).unwrap(), 0.0);
/// assert_eq!(equal_support(&labels, &[0.9, 0.1, 0.8, 0.2]).unwrap(), 0.5);
/// ```
pub fn equal_support(labels: &[bool], scores: &[f64]) -> Result<f64> {
    let Defined { labels, scores } = defined_inputs(labels, scores)?;
    let support = labels.iter().filter(|&&l| l).count();

    let thresholds = thresholds_descending(&scores);
    let threshold = thresholds
        .iter()
        .copied()
        .find(|&t| scores.iter().filter(|&&s| s >= t).count() >= support)
        .unwrap_or(thresholds[thresholds.len() - 1]);

    Ok(hamming_at(&labels, &scores, threshold))
}

/// Error at the largest threshold flagging every labelled index.
pub fn full_support(labels: &[bool], scores: &[f64]) -> Result<f64> {
    let Defined { labels, scores } = defined_inputs(labels, scores)?;

    let thresholds = thresholds_descending(&scores);
    let threshold = thresholds
        .iter()
        .copied()
        .find(|&t| {
            labels
                .iter()
                .zip(&scores)
                .all(|(&l, &s)| !l || s >= t)
        })
        .unwrap_or(thresholds[thresholds.len() - 1]);

    Ok(hamming_at(&labels, &scores, threshold))
}

/// Smallest error over all thresholds taken from the anomaly vector.
pub fn best_support(labels: &[bool], scores: &[f64]) -> Result<f64> {
    let Defined { labels, scores } = defined_inputs(labels, scores)?;

    Ok(thresholds_descending(&scores)
        .into_iter()
        .map(|t| hamming_at(&labels, &scores, t))
        .fold(f64::INFINITY, f64::min))
}

/// Euclidean distance between the min-max normalized anomaly vector and the labels.
///
/// A constant anomaly vector normalizes to all zeros.
pub fn normalized_euclidean(labels: &[bool], scores: &[f64]) -> Result<f64> {
    let Defined { labels, scores } = defined_inputs(labels, scores)?;

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = max - min;

    let sum_sq: f64 = labels
        .iter()
        .zip(&scores)
        .map(|(&l, &s)| {
            let normalized = if width > 0.0 { (s - min) / width } else { 0.0 };
            let target = if l { 1.0 } else { 0.0 };
            (normalized - target).powi(2)
        })
        .sum();
    Ok(sum_sq.sqrt())
}
