//! Subsequence bounds verification.

use crate::error::{AnomalyError, Result};

/// Verify that `[start, end]` is ordered and lies within `sequence`.
pub fn verify_subsequence(sequence: &[f64], start: usize, end: usize) -> Result<()> {
    if start > end {
        return Err(AnomalyError::SubsequenceOrder { start, end });
    }
    if end >= sequence.len() {
        return Err(AnomalyError::SubsequenceBounds {
            start,
            end,
            sequence_end: sequence.len().saturating_sub(1),
        });
    }
    Ok(())
}
