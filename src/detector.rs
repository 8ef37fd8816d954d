//! Anomaly detector orchestrating the scoring pipeline.
//!
//! For each window of the evaluated sequence the detector selects a context,
//! cuts it into a reference set, converts window and references to the
//! configured representation, scores the window and folds the score into the
//! aggregator.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::config::{ComponentConfig, DetectorConfig};
//! use anofox_anomaly::detector::AnomalyDetector;
//!
//! let config = DetectorConfig {
//!     evaluation_filter: ComponentConfig::new("sliding_window").with("width", 3),
//!     context: ComponentConfig::new("trivial"),
//!     reference_filter: ComponentConfig::new("sliding_window").with("width", 3),
//!     evaluator: ComponentConfig::new("knn").with("k", 1),
//!     aggregator: ComponentConfig::new("max"),
//!     ..Default::default()
//! };
//!
//! let mut detector = AnomalyDetector::from_config(&config).unwrap();
//! let sequence = [0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0];
//! let scores = detector.evaluate(&sequence).unwrap();
//!
//! assert_eq!(scores.len(), sequence.len());
//! assert!(scores[5] > scores[0]);
//! ```

use crate::aggregators::{aggregator_from_config, BoxedAggregator};
use crate::config::DetectorConfig;
use crate::contexts::Context;
use crate::error::{AnomalyError, Result};
use crate::evaluators::Evaluator;
use crate::filters::SlidingWindow;
use crate::representations::RepresentationPipeline;

/// Windowed anomaly detector.
///
/// A detector owns its aggregator state and, for one-class evaluators, the
/// training state, so one instance must not evaluate two sequences at once.
#[derive(Debug)]
pub struct AnomalyDetector {
    evaluation_filter: SlidingWindow,
    context: Context,
    reference_filter: SlidingWindow,
    evaluator: Evaluator,
    aggregator: BoxedAggregator,
    representation: RepresentationPipeline,
}

impl AnomalyDetector {
    /// Assemble a detector from typed components.
    ///
    /// Fails if the evaluator needs symbolic input and the representation
    /// does not produce it.
    pub fn new(
        evaluation_filter: SlidingWindow,
        context: Context,
        reference_filter: SlidingWindow,
        evaluator: Evaluator,
        aggregator: BoxedAggregator,
        representation: RepresentationPipeline,
    ) -> Result<Self> {
        let expected = if evaluator.requires_symbolic_input() {
            crate::core::RepresentationKind::Symbolic
        } else {
            crate::core::RepresentationKind::Continuous
        };
        if representation.output_kind() != expected {
            return Err(AnomalyError::config(
                "representation",
                format!(
                    "evaluator expects {expected} input, representation produces {}",
                    representation.output_kind()
                ),
            ));
        }

        Ok(Self {
            evaluation_filter,
            context,
            reference_filter,
            evaluator,
            aggregator,
            representation,
        })
    }

    /// Build a detector from option records.
    ///
    /// Configuration errors name the parameter qualified by its component,
    /// e.g. `reference_filter.width`. The discretization record is only
    /// consulted when the evaluator needs symbolic input.
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        let evaluation_filter = SlidingWindow::from_config(&config.evaluation_filter)
            .map_err(|e| e.in_component("evaluation_filter"))?;
        let context =
            Context::from_config(&config.context).map_err(|e| e.in_component("context"))?;
        let reference_filter = SlidingWindow::from_config(&config.reference_filter)
            .map_err(|e| e.in_component("reference_filter"))?;
        let evaluator =
            Evaluator::from_config(&config.evaluator).map_err(|e| e.in_component("evaluator"))?;
        let aggregator =
            aggregator_from_config(&config.aggregator).map_err(|e| e.in_component("aggregator"))?;
        let representation = RepresentationPipeline::from_configs(
            config.representation.as_ref(),
            config.discretization.as_ref(),
            evaluator.requires_symbolic_input(),
        )?;

        tracing::debug!(
            width = evaluation_filter.width(),
            step = evaluation_filter.step(),
            context = context.name(),
            evaluator = evaluator.name(),
            aggregator = aggregator.name(),
            stages = representation.stages().len(),
            "built anomaly detector"
        );

        Self::new(
            evaluation_filter,
            context,
            reference_filter,
            evaluator,
            aggregator,
            representation,
        )
    }

    /// Evaluation window filter.
    pub fn evaluation_filter(&self) -> &SlidingWindow {
        &self.evaluation_filter
    }

    /// Context function.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Reference filter.
    pub fn reference_filter(&self) -> &SlidingWindow {
        &self.reference_filter
    }

    /// Window evaluator.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Representation applied to windows and references.
    pub fn representation(&self) -> &RepresentationPipeline {
        &self.representation
    }

    /// Feed every window of a known-normal sequence to the evaluator.
    ///
    /// Only one-class evaluators keep these samples; k-NN ignores them.
    pub fn train(&mut self, sequence: &[f64]) -> Result<()> {
        if sequence.is_empty() {
            return Err(AnomalyError::EmptyData);
        }
        let mut fed = 0usize;
        let windows = self
            .evaluation_filter
            .windows(sequence)
            .map_err(|e| e.in_component("evaluation_filter"))?;
        for window in windows {
            let converted = self.representation.convert(window.data)?;
            self.evaluator.train(&converted)?;
            fed += 1;
        }
        tracing::debug!(windows = fed, evaluator = self.evaluator.name(), "training windows fed");
        Ok(())
    }

    /// Score every index of `sequence`.
    pub fn evaluate(&mut self, sequence: &[f64]) -> Result<Vec<f64>> {
        self.evaluate_with_progress(sequence, |_| {})
    }

    /// Score every index of `sequence`, reporting progress in `[0, 1]`.
    ///
    /// `progress` is called after each window with the fraction of windows
    /// done, then once more with exactly `1.0`.
    pub fn evaluate_with_progress<F>(&mut self, sequence: &[f64], mut progress: F) -> Result<Vec<f64>>
    where
        F: FnMut(f64),
    {
        if sequence.is_empty() {
            return Err(AnomalyError::EmptyData);
        }

        let windows = self
            .evaluation_filter
            .windows(sequence)
            .map_err(|e| e.in_component("evaluation_filter"))?;
        let count = windows.len();
        tracing::debug!(
            length = sequence.len(),
            windows = count,
            "evaluating sequence"
        );

        self.aggregator.init(sequence.len());
        for (i, window) in windows.enumerate() {
            let parts = self.context.context(sequence, window.start, window.end)?;
            let references = self.reference_filter.reference_set(&parts);

            let candidate = self.representation.convert(window.data)?;
            let references = self.representation.convert_all(&references)?;

            let score = self.evaluator.evaluate(&candidate, &references)?;
            tracing::trace!(
                start = window.start,
                end = window.end,
                references = references.len(),
                score,
                "window scored"
            );
            self.aggregator.add_score(score, window.start, window.end);

            progress((i + 1) as f64 / count as f64);
        }
        progress(1.0);

        Ok(self.aggregator.aggregated_scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::MaxAggregator;
    use crate::config::ComponentConfig;
    use crate::evaluators::{DistanceMeasure, KnnEvaluator};
    use crate::representations::Converter;

    fn plateau() -> Vec<f64> {
        vec![0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0]
    }

    fn knn_detector(k: usize, context: Context) -> AnomalyDetector {
        AnomalyDetector::new(
            SlidingWindow::new(3, 1).unwrap(),
            context,
            SlidingWindow::new(3, 1).unwrap(),
            Evaluator::Knn(KnnEvaluator::new(k, DistanceMeasure::Euclidean).unwrap()),
            Box::new(MaxAggregator::new()),
            RepresentationPipeline::identity(),
        )
        .unwrap()
    }

    fn base_config() -> DetectorConfig {
        DetectorConfig {
            evaluation_filter: ComponentConfig::new("sliding_window").with("width", 3),
            context: ComponentConfig::new("trivial"),
            reference_filter: ComponentConfig::new("sliding_window").with("width", 3),
            evaluator: ComponentConfig::new("knn").with("k", 1),
            aggregator: ComponentConfig::new("max"),
            representation: None,
            discretization: None,
        }
    }

    // ==================== evaluate ====================

    #[test]
    fn plateau_is_elevated() {
        let mut detector = knn_detector(1, Context::Trivial);
        let scores = detector.evaluate(&plateau()).unwrap();

        assert_eq!(scores.len(), 11);
        for i in [0, 1, 9, 10] {
            assert_eq!(scores[i], 0.0, "index {i}");
        }
        for i in 3..=7 {
            assert!(scores[i] >= 10.0, "index {i}: {}", scores[i]);
        }
    }

    #[test]
    fn undersized_reference_set_yields_nan_windows() {
        // Novelty context: the first windows have fewer than k references.
        let mut detector = AnomalyDetector::new(
            SlidingWindow::new(3, 1).unwrap(),
            Context::Novelty,
            SlidingWindow::new(3, 1).unwrap(),
            Evaluator::Knn(KnnEvaluator::new(1, DistanceMeasure::Euclidean).unwrap()),
            Box::new(crate::aggregators::MeanAggregator::new()),
            RepresentationPipeline::identity(),
        )
        .unwrap();
        let scores = detector.evaluate(&plateau()).unwrap();
        assert!(scores[0].is_nan());
        assert_eq!(scores.len(), 11);
    }

    #[test]
    fn evaluate_rejects_empty_sequence() {
        let mut detector = knn_detector(1, Context::Trivial);
        assert_eq!(detector.evaluate(&[]), Err(AnomalyError::EmptyData));
    }

    #[test]
    fn evaluate_rejects_short_sequence() {
        let mut detector = knn_detector(1, Context::Trivial);
        assert!(matches!(
            detector.evaluate(&[1.0, 2.0]),
            Err(AnomalyError::Configuration { ref parameter, .. }) if parameter == "evaluation_filter.width"
        ));
    }

    #[test]
    fn repeated_evaluation_resets_aggregator() {
        let mut detector = knn_detector(1, Context::Trivial);
        let first = detector.evaluate(&plateau()).unwrap();
        let second = detector.evaluate(&plateau()).unwrap();
        assert_eq!(first, second);

        let flat = detector.evaluate(&[1.0; 8]).unwrap();
        assert!(flat.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn progress_is_monotone_and_ends_at_one() {
        let mut detector = knn_detector(1, Context::Trivial);
        let mut reported = Vec::new();
        detector
            .evaluate_with_progress(&plateau(), |p| reported.push(p))
            .unwrap();

        // 9 windows plus the final report.
        assert_eq!(reported.len(), 10);
        assert!(reported.windows(2).all(|w| w[0] <= w[1]));
        assert!(reported.iter().all(|&p| (0.0..=1.0).contains(&p)));
        assert_eq!(*reported.last().unwrap(), 1.0);
    }

    // ==================== construction ====================

    #[test]
    fn from_config_builds_components() {
        let detector = AnomalyDetector::from_config(&base_config()).unwrap();
        assert_eq!(detector.evaluation_filter().width(), 3);
        assert_eq!(detector.context(), &Context::Trivial);
        assert_eq!(detector.evaluator().name(), "knn");
        assert!(detector.representation().stages().is_empty());
    }

    #[test]
    fn from_config_chains_discretization_for_cdm() {
        let mut config = base_config();
        config.evaluator = ComponentConfig::new("knn")
            .with("k", 1)
            .with("distance_measure", "cdm");
        config.representation = Some(ComponentConfig::new("z-normalize"));
        config.discretization = Some(
            ComponentConfig::new("sax")
                .with("dimensions", 3)
                .with("alphabet_size", 3),
        );

        let detector = AnomalyDetector::from_config(&config).unwrap();
        assert_eq!(
            detector.representation().stages(),
            &[
                Converter::ZNormalize,
                Converter::Sax {
                    dimensions: 3,
                    alphabet_size: 3
                }
            ]
        );
    }

    #[test]
    fn from_config_reports_offending_component() {
        let mut config = base_config();
        config.aggregator = ComponentConfig::new("mode");
        assert!(matches!(
            AnomalyDetector::from_config(&config),
            Err(AnomalyError::Configuration { ref parameter, ref message })
                if parameter == "aggregator.method" && message.contains("mode")
        ));

        let mut config = base_config();
        config.evaluator = ComponentConfig::new("knn").with("distance_measure", "cdm");
        assert!(matches!(
            AnomalyDetector::from_config(&config),
            Err(AnomalyError::Configuration { ref parameter, .. }) if parameter == "discretization"
        ));
    }

    #[test]
    fn from_config_tells_filters_apart() {
        let mut config = base_config();
        config.reference_filter = ComponentConfig::new("sliding_window").with("width", 0);
        assert!(matches!(
            AnomalyDetector::from_config(&config),
            Err(AnomalyError::Configuration { ref parameter, .. }) if parameter == "reference_filter.width"
        ));

        let mut config = base_config();
        config.evaluation_filter = ComponentConfig::new("sliding_window");
        assert!(matches!(
            AnomalyDetector::from_config(&config),
            Err(AnomalyError::Configuration { ref parameter, .. }) if parameter == "evaluation_filter.width"
        ));

        let mut config = base_config();
        config.representation = Some(ComponentConfig::new("wavelet-packet"));
        assert!(matches!(
            AnomalyDetector::from_config(&config),
            Err(AnomalyError::Configuration { ref parameter, .. }) if parameter == "representation.method"
        ));
    }

    #[test]
    fn new_rejects_representation_kind_mismatch() {
        let result = AnomalyDetector::new(
            SlidingWindow::new(3, 1).unwrap(),
            Context::Trivial,
            SlidingWindow::new(3, 1).unwrap(),
            Evaluator::Knn(KnnEvaluator::new(1, DistanceMeasure::Cdm).unwrap()),
            Box::new(MaxAggregator::new()),
            RepresentationPipeline::identity(),
        );
        assert!(matches!(result, Err(AnomalyError::Configuration { .. })));
    }

    // ==================== train ====================

    #[test]
    fn train_feeds_one_class_evaluator() {
        let mut config = base_config();
        config.evaluator = ComponentConfig::new("svm").with("gamma", 0.5);
        let mut detector = AnomalyDetector::from_config(&config).unwrap();

        detector.train(&[0.0, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0]).unwrap();
        match detector.evaluator() {
            Evaluator::OneClass(oc) => assert_eq!(oc.buffered(), 5),
            other => panic!("unexpected evaluator {other:?}"),
        }

        let scores = detector.evaluate(&plateau()).unwrap();
        assert!(scores.iter().all(|&s| s == 0.0 || s == 1.0));
        assert!(detector.train(&plateau()).is_err());
    }
}
