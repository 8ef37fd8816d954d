//! Fixed-width, fixed-step sliding window filter.

use crate::config::ComponentConfig;
use crate::core::Window;
use crate::error::{AnomalyError, Result};

/// Sliding window filter with a fixed width and step.
///
/// Consecutive windows overlap by `width - step` samples when `step < width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    width: usize,
    step: usize,
}

impl SlidingWindow {
    /// Create a filter. Both `width` and `step` must be positive.
    pub fn new(width: usize, step: usize) -> Result<Self> {
        if width == 0 {
            return Err(AnomalyError::config("width", "must be a positive integer"));
        }
        if step == 0 {
            return Err(AnomalyError::config("step", "must be a positive integer"));
        }
        Ok(Self { width, step })
    }

    /// Build a filter from an option record (`method`, `width`, `step`).
    pub fn from_config(config: &ComponentConfig) -> Result<Self> {
        let method = config.method_or("sliding_window")?;
        if method != "sliding_window" {
            return Err(AnomalyError::config(
                "method",
                format!("unknown filter method \"{method}\""),
            ));
        }
        let width = config.usize_required("width")?;
        let step = config.usize_or("step", 1)?;
        Self::new(width, step)
    }

    /// Window width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Distance between consecutive window starts.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of windows produced for a sequence of the given length.
    ///
    /// Zero when the sequence is shorter than the window.
    pub fn window_count(&self, len: usize) -> usize {
        if len < self.width {
            0
        } else {
            (len - self.width) / self.step + 1
        }
    }

    /// Enumerate the windows of `sequence` lazily.
    ///
    /// Fails if the window is wider than the sequence.
    pub fn windows<'a>(&self, sequence: &'a [f64]) -> Result<Windows<'a>> {
        if self.width > sequence.len() {
            return Err(AnomalyError::config(
                "width",
                format!(
                    "window width {} is larger than sequence length {}",
                    self.width,
                    sequence.len()
                ),
            ));
        }
        Ok(self.windows_unchecked(sequence))
    }

    fn windows_unchecked<'a>(&self, sequence: &'a [f64]) -> Windows<'a> {
        Windows {
            sequence,
            width: self.width,
            step: self.step,
            next_start: 0,
            remaining: self.window_count(sequence.len()),
        }
    }

    /// Cut a reference set out of a context.
    ///
    /// Windows are drawn from each context part in turn and concatenated.
    /// Parts shorter than the window contribute nothing.
    pub fn reference_set<'a>(&self, context: &[&'a [f64]]) -> Vec<&'a [f64]> {
        let total: usize = context.iter().map(|s| self.window_count(s.len())).sum();
        let mut references = Vec::with_capacity(total);
        for part in context {
            references.extend(self.windows_unchecked(part).map(|w| w.data));
        }
        references
    }
}

/// Lazy iterator over the windows of a sequence.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    sequence: &'a [f64],
    width: usize,
    step: usize,
    next_start: usize,
    remaining: usize,
}

impl<'a> Iterator for Windows<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next_start;
        let end = start + self.width - 1;
        self.next_start += self.step;
        self.remaining -= 1;
        Some(Window::new(self.sequence, start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Windows<'_> {}
