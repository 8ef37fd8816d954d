//! Score aggregators.
//!
//! Every window contributes one score to each index it covers. An aggregator
//! folds these contributions into one value per index.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::aggregators::{Aggregator, MaxAggregator};
//!
//! let mut agg = MaxAggregator::new();
//! agg.init(4);
//! agg.add_score(1.0, 0, 1);
//! agg.add_score(3.0, 1, 2);
//! assert_eq!(agg.aggregated_scores(), vec![1.0, 3.0, 3.0, 0.0]);
//! ```

mod extremum;
mod mean;
mod median;

pub use extremum::{MaxAggregator, MinAggregator};
pub use mean::MeanAggregator;
pub use median::MedianAggregator;

use crate::config::ComponentConfig;
use crate::error::{AnomalyError, Result};

/// Combines overlapping window scores into one score per index.
///
/// This trait is object-safe and can be used with `Box<dyn Aggregator>`.
/// An aggregator holds state for one sequence at a time; `init` discards it.
pub trait Aggregator: std::fmt::Debug + Send {
    /// Reset the accumulation state for a sequence of `length` samples.
    fn init(&mut self, length: usize);

    /// Fold `score` into every index of the inclusive range `[start, end]`.
    ///
    /// Indices past the initialized length are ignored.
    fn add_score(&mut self, score: f64, start: usize, end: usize);

    /// Final score per index.
    fn aggregated_scores(&self) -> Vec<f64>;

    /// Configuration name.
    fn name(&self) -> &str;
}

/// Type alias for boxed aggregator trait objects.
pub type BoxedAggregator = Box<dyn Aggregator>;

/// Build an aggregator from an option record (`max`, `min`, `mean`, `median`).
pub fn aggregator_from_config(config: &ComponentConfig) -> Result<BoxedAggregator> {
    let method = config.method_or("max")?;
    aggregator_by_name(&method)
}

/// Build an aggregator by name.
pub fn aggregator_by_name(name: &str) -> Result<BoxedAggregator> {
    match name {
        "max" => Ok(Box::new(MaxAggregator::new())),
        "min" => Ok(Box::new(MinAggregator::new())),
        "mean" => Ok(Box::new(MeanAggregator::new())),
        "median" => Ok(Box::new(MedianAggregator::new())),
        other => Err(AnomalyError::config(
            "method",
            format!("unknown aggregator \"{other}\""),
        )),
    }
}

/// Clamp an inclusive range to `[0, length)`; `None` when nothing remains.
pub(crate) fn covered(start: usize, end: usize, length: usize) -> Option<std::ops::RangeInclusive<usize>> {
    if start > end || start >= length {
        return None;
    }
    Some(start..=end.min(length - 1))
}
