//! # anofox-anomaly
//!
//! Windowed anomaly scoring for univariate time series.
//!
//! A sequence is cut into sliding windows. Each window is compared against a
//! reference set drawn from its context (neighbouring data, the past, the
//! rest of the series or an external normal sequence) with a k-NN distance
//! or a one-class classifier. Overlapping window scores are then combined
//! into one anomaly score per index.
//!
//! Also provides the representations used before scoring (z-normalization,
//! PAA, DFT, DWT, SAX), label-based error measures and synthetic sequence
//! generation for experiments.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]

pub mod aggregators;
pub mod config;
pub mod contexts;
pub mod core;
pub mod detector;
pub mod error;
pub mod evaluation;
pub mod evaluators;
pub mod filters;
pub mod representations;
pub mod utils;

pub use error::{AnomalyError, Result};

pub mod prelude {
    pub use crate::aggregators::{Aggregator, BoxedAggregator};
    pub use crate::config::{ComponentConfig, DetectorConfig};
    pub use crate::contexts::Context;
    pub use crate::core::{Representation, RepresentationKind, Window};
    pub use crate::detector::AnomalyDetector;
    pub use crate::error::{AnomalyError, Result};
    pub use crate::evaluators::{DistanceMeasure, Evaluator, KnnEvaluator, OneClassEvaluator};
    pub use crate::filters::SlidingWindow;
    pub use crate::representations::{Converter, RepresentationPipeline};
}
