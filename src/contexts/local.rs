//! Local neighbourhood contexts.

use super::verify::verify_subsequence;
use crate::error::Result;

/// The `left_width` samples before and `right_width` samples after `[start, end]`.
///
/// Both halves are clamped to the sequence and may be empty.
pub fn local_context(
    sequence: &[f64],
    start: usize,
    end: usize,
    left_width: usize,
    right_width: usize,
) -> Result<[&[f64]; 2]> {
    verify_subsequence(sequence, start, end)?;

    let n = sequence.len();
    let left = &sequence[start.saturating_sub(left_width)..start];
    let right_start = end + 1;
    let right_end = right_start.saturating_add(right_width).min(n);
    let right = &sequence[right_start..right_end];

    Ok([left, right])
}
