//! Distance functions used by the k-NN evaluator.
//!
//! Each measure declares whether it works on symbolic input, which decides
//! whether the detector chains a discretization after the representation.

pub mod cdm;
pub mod continuous;

pub use cdm::{cdm, cdm_with_complexity, kolmogorov_complexity};
pub use continuous::{dtw_distance, euclidean_distance};

use crate::core::Representation;
use crate::error::{AnomalyError, Result};

/// Distance measure between two representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMeasure {
    /// L2 norm of the difference (equal lengths only).
    #[default]
    Euclidean,
    /// Dynamic time warping.
    Dtw,
    /// Compression-based dissimilarity (symbolic input only).
    Cdm,
}

impl DistanceMeasure {
    /// Look up a measure by its configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "euclidean" => Ok(DistanceMeasure::Euclidean),
            "dtw" => Ok(DistanceMeasure::Dtw),
            "cdm" => Ok(DistanceMeasure::Cdm),
            other => Err(AnomalyError::config(
                "distance_measure",
                format!("unknown distance measure \"{other}\""),
            )),
        }
    }

    /// Configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMeasure::Euclidean => "euclidean",
            DistanceMeasure::Dtw => "dtw",
            DistanceMeasure::Cdm => "cdm",
        }
    }

    /// Whether the measure operates on symbolic representations.
    pub fn is_discrete(&self) -> bool {
        matches!(self, DistanceMeasure::Cdm)
    }

    /// Distance between two representations.
    pub fn distance(&self, a: &Representation, b: &Representation) -> Result<f64> {
        match self {
            DistanceMeasure::Euclidean => euclidean_distance(a.as_continuous()?, b.as_continuous()?),
            DistanceMeasure::Dtw => Ok(dtw_distance(a.as_continuous()?, b.as_continuous()?)),
            DistanceMeasure::Cdm => cdm(a.as_symbolic()?, b.as_symbolic()?),
        }
    }

    /// Distances from `query` to every reference, in order.
    pub fn distances(&self, query: &Representation, references: &[Representation]) -> Result<Vec<f64>> {
        match self {
            DistanceMeasure::Cdm => {
                let word = query.as_symbolic()?;
                let complexity = kolmogorov_complexity(word)?;
                references
                    .iter()
                    .map(|r| cdm_with_complexity(word, complexity, r.as_symbolic()?))
                    .collect()
            }
            _ => references.iter().map(|r| self.distance(query, r)).collect(),
        }
    }
}
