//! Context functions.
//!
//! A context is the data a window may be compared against. It is returned as
//! an ordered list of sequence parts borrowed from the evaluated sequence (or
//! from an external reference for the semi-supervised variant).
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::contexts::Context;
//!
//! let seq = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let context = Context::Trivial;
//! let parts = context.context(&seq, 2, 3).unwrap();
//! assert_eq!(parts, vec![&seq[0..2], &seq[4..6]]);
//! ```

mod local;
mod verify;

pub use local::local_context;
pub use verify::verify_subsequence;

use crate::config::ComponentConfig;
use crate::error::{AnomalyError, Result};

/// Default half-width of the local contexts.
pub const DEFAULT_LOCAL_WIDTH: usize = 100;

/// Strategy selecting comparison data for a window.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Context {
    /// `width` samples on each side of the window.
    LocalSymmetric { width: usize },
    /// `left_width` samples before and `right_width` samples after the window.
    LocalAsymmetric {
        left_width: usize,
        right_width: usize,
    },
    /// Everything before the window.
    Novelty,
    /// Everything except the window.
    #[default]
    Trivial,
    /// A fixed external reference sequence, regardless of the window.
    SemiSupervised { reference: Vec<f64> },
}

impl Context {
    /// Symmetric local context.
    pub fn local_symmetric(width: usize) -> Self {
        Context::LocalSymmetric { width }
    }

    /// Asymmetric local context.
    pub fn local_asymmetric(left_width: usize, right_width: usize) -> Self {
        Context::LocalAsymmetric {
            left_width,
            right_width,
        }
    }

    /// Constant context over an external reference sequence.
    pub fn semi_supervised(reference: Vec<f64>) -> Self {
        Context::SemiSupervised { reference }
    }

    /// Build a context from an option record.
    ///
    /// Recognized methods: `local_symmetric` (`width`), `local_asymmetric`
    /// (`left_width`, `right_width`), `novelty`, `trivial` and
    /// `semi-supervised` (`reference_sequence`).
    pub fn from_config(config: &ComponentConfig) -> Result<Self> {
        let method = config.method_or("local_symmetric")?;
        match method.as_str() {
            "local_symmetric" => Ok(Context::local_symmetric(
                config.usize_or("width", DEFAULT_LOCAL_WIDTH)?,
            )),
            "local_asymmetric" => Ok(Context::local_asymmetric(
                config.usize_or("left_width", DEFAULT_LOCAL_WIDTH)?,
                config.usize_or("right_width", DEFAULT_LOCAL_WIDTH)?,
            )),
            "novelty" => Ok(Context::Novelty),
            "trivial" => Ok(Context::Trivial),
            "semi-supervised" | "semi_supervised" => {
                let reference = config.f64_vec_opt("reference_sequence")?.ok_or_else(|| {
                    AnomalyError::config("reference_sequence", "missing required parameter")
                })?;
                Ok(Context::semi_supervised(reference))
            }
            other => Err(AnomalyError::config(
                "method",
                format!("unknown context method \"{other}\""),
            )),
        }
    }

    /// Short name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Context::LocalSymmetric { .. } => "local_symmetric",
            Context::LocalAsymmetric { .. } => "local_asymmetric",
            Context::Novelty => "novelty",
            Context::Trivial => "trivial",
            Context::SemiSupervised { .. } => "semi-supervised",
        }
    }

    /// Comparison data for the window `[start, end]` of `sequence`.
    ///
    /// All variants except semi-supervised validate the window bounds first.
    pub fn context<'a>(
        &'a self,
        sequence: &'a [f64],
        start: usize,
        end: usize,
    ) -> Result<Vec<&'a [f64]>> {
        match self {
            Context::LocalSymmetric { width } => {
                Ok(local_context(sequence, start, end, *width, *width)?.to_vec())
            }
            Context::LocalAsymmetric {
                left_width,
                right_width,
            } => Ok(local_context(sequence, start, end, *left_width, *right_width)?.to_vec()),
            Context::Novelty => {
                verify_subsequence(sequence, start, end)?;
                Ok(vec![&sequence[..start]])
            }
            Context::Trivial => {
                verify_subsequence(sequence, start, end)?;
                Ok(vec![&sequence[..start], &sequence[end + 1..]])
            }
            Context::SemiSupervised { reference } => Ok(vec![reference.as_slice()]),
        }
    }
}
