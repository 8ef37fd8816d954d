//! Window evaluators.
//!
//! An evaluator scores one window against a reference set. Two variants are
//! available:
//! - k-NN: distance to the k-th nearest reference (continuous score)
//! - one-class: a one-class SVM trained once, then used as a binary classifier
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::core::Representation;
//! use anofox_anomaly::evaluators::{DistanceMeasure, Evaluator, KnnEvaluator};
//!
//! let mut evaluator = Evaluator::Knn(KnnEvaluator::new(1, DistanceMeasure::Euclidean).unwrap());
//! let window = Representation::from(vec![0.0, 0.0]);
//! let refs = vec![Representation::from(vec![3.0, 4.0])];
//! assert_eq!(evaluator.evaluate(&window, &refs).unwrap(), 5.0);
//! ```

pub mod distances;
pub mod knn;
pub mod one_class;
pub mod svm;

pub use distances::DistanceMeasure;
pub use knn::KnnEvaluator;
pub use one_class::OneClassEvaluator;
pub use svm::{Kernel, OneClassModel, OneClassSvm};

use crate::config::ComponentConfig;
use crate::core::Representation;
use crate::error::{AnomalyError, Result};

/// Default number of neighbours.
pub const DEFAULT_K: usize = 3;
/// Default ν of the one-class SVM.
pub const DEFAULT_NU: f64 = 0.1;
/// Default kernel γ of the one-class SVM.
pub const DEFAULT_GAMMA: f64 = 0.1;

/// Window scoring strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluator {
    /// k-th nearest neighbour distance.
    Knn(KnnEvaluator),
    /// One-class classifier.
    OneClass(OneClassEvaluator),
}

impl Evaluator {
    /// Build an evaluator from an option record.
    ///
    /// `knn` reads `k` and `distance_measure`; `svm` (alias `one_class`)
    /// reads `kernel`, `nu` and `gamma`.
    pub fn from_config(config: &ComponentConfig) -> Result<Self> {
        let method = config.method_or("knn")?;
        match method.as_str() {
            "knn" => {
                let k = config.usize_or("k", DEFAULT_K)?;
                let distance =
                    DistanceMeasure::from_name(&config.string_or("distance_measure", "euclidean")?)?;
                Ok(Evaluator::Knn(KnnEvaluator::new(k, distance)?))
            }
            "svm" | "one_class" => {
                let gamma = config.f64_or("gamma", DEFAULT_GAMMA)?;
                let kernel = Kernel::from_name(&config.string_or("kernel", "rbf")?, gamma)?;
                let nu = config.f64_or("nu", DEFAULT_NU)?;
                Ok(Evaluator::OneClass(OneClassEvaluator::new(OneClassSvm::new(
                    kernel, nu,
                )?)))
            }
            other => Err(AnomalyError::config(
                "method",
                format!("unknown evaluator method \"{other}\""),
            )),
        }
    }

    /// Short name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Evaluator::Knn(_) => "knn",
            Evaluator::OneClass(_) => "one_class",
        }
    }

    /// Whether windows must be discretized before scoring.
    pub fn requires_symbolic_input(&self) -> bool {
        match self {
            Evaluator::Knn(knn) => knn.requires_symbolic_input(),
            Evaluator::OneClass(_) => false,
        }
    }

    /// Offer a known-normal training window.
    ///
    /// k-NN has no training phase and ignores it.
    pub fn train(&mut self, window: &Representation) -> Result<()> {
        match self {
            Evaluator::Knn(_) => Ok(()),
            Evaluator::OneClass(one_class) => one_class.train(window),
        }
    }

    /// Score `window` against `references`.
    pub fn evaluate(&mut self, window: &Representation, references: &[Representation]) -> Result<f64> {
        match self {
            Evaluator::Knn(knn) => knn.evaluate(window, references),
            Evaluator::OneClass(one_class) => one_class.evaluate(window, references),
        }
    }
}
