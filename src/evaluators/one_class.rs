//! Train-then-score evaluator backed by a one-class SVM.

use super::svm::{OneClassModel, OneClassSvm};
use crate::core::Representation;
use crate::error::{AnomalyError, Result};

/// Lifecycle of a [`OneClassEvaluator`].
///
/// `Training` moves to `Scoring` on the first `evaluate` call and never back.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    /// Collecting training samples.
    Training { buffer: Vec<Vec<f64>> },
    /// Classifier fitted; the buffer has been released.
    Scoring { model: OneClassModel },
}

/// Binary evaluator: 0 for windows inside the learned support, 1 otherwise.
///
/// Samples are buffered with [`train`](Self::train). The first call to
/// [`evaluate`](Self::evaluate) fits the classifier on the buffer, or on that
/// call's reference set when nothing was buffered.
#[derive(Debug, Clone, PartialEq)]
pub struct OneClassEvaluator {
    svm: OneClassSvm,
    phase: Phase,
}

impl OneClassEvaluator {
    /// Create an evaluator in the training phase.
    pub fn new(svm: OneClassSvm) -> Self {
        Self {
            svm,
            phase: Phase::Training { buffer: Vec::new() },
        }
    }

    /// Solver configuration.
    pub fn svm(&self) -> &OneClassSvm {
        &self.svm
    }

    /// Whether the classifier has been fitted.
    pub fn is_fitted(&self) -> bool {
        matches!(self.phase, Phase::Scoring { .. })
    }

    /// Number of buffered training samples (zero once fitted).
    pub fn buffered(&self) -> usize {
        match &self.phase {
            Phase::Training { buffer } => buffer.len(),
            Phase::Scoring { .. } => 0,
        }
    }

    /// Buffer a training sample.
    ///
    /// Fails once the evaluator has moved to the scoring phase.
    pub fn train(&mut self, window: &Representation) -> Result<()> {
        let sample = window.as_continuous()?.to_vec();
        match &mut self.phase {
            Phase::Training { buffer } => {
                buffer.push(sample);
                Ok(())
            }
            Phase::Scoring { .. } => Err(AnomalyError::ComputationError(
                "one-class evaluator is already fitted".to_string(),
            )),
        }
    }

    /// Classify a window, fitting first if still in the training phase.
    pub fn evaluate(&mut self, window: &Representation, references: &[Representation]) -> Result<f64> {
        let model = match &self.phase {
            Phase::Scoring { model } => return classify(model, window),
            Phase::Training { buffer } if buffer.is_empty() => {
                let samples = references
                    .iter()
                    .map(|r| r.as_continuous().map(<[f64]>::to_vec))
                    .collect::<Result<Vec<_>>>()?;
                self.svm.fit(&samples)?
            }
            Phase::Training { buffer } => self.svm.fit(buffer)?,
        };

        let score = classify(&model, window);
        self.phase = Phase::Scoring { model };
        score
    }
}

/// 0 for an inlier, 1 otherwise.
fn classify(model: &OneClassModel, window: &Representation) -> Result<f64> {
    let inlier = model.is_inlier(window.as_continuous()?)?;
    Ok(if inlier { 0.0 } else { 1.0 })
}
