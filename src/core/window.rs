//! Window type produced by the sliding window filter.

/// A contiguous subsequence of a sequence together with its inclusive bounds.
///
/// Invariant: `start <= end` and `end - start + 1 == data.len()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    /// The samples covered by the window.
    pub data: &'a [f64],
    /// Index of the first sample in the source sequence.
    pub start: usize,
    /// Index of the last sample in the source sequence (inclusive).
    pub end: usize,
}

impl<'a> Window<'a> {
    /// Create a window over `sequence[start..=end]`.
    ///
    /// The caller guarantees the bounds lie within the sequence.
    pub(crate) fn new(sequence: &'a [f64], start: usize, end: usize) -> Self {
        Self {
            data: &sequence[start..=end],
            start,
            end,
        }
    }

    /// Number of samples in the window.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Windows are never empty; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check whether the window covers the given sequence index.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}
