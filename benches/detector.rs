//! Benchmarks for the anomaly scoring pipeline.

use anofox_anomaly::aggregators::MaxAggregator;
use anofox_anomaly::contexts::Context;
use anofox_anomaly::detector::AnomalyDetector;
use anofox_anomaly::evaluators::distances::{dtw_distance, kolmogorov_complexity};
use anofox_anomaly::evaluators::{DistanceMeasure, Evaluator, KnnEvaluator};
use anofox_anomaly::filters::SlidingWindow;
use anofox_anomaly::representations::{sax, Converter, RepresentationPipeline};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            (2.0 * std::f64::consts::PI * i as f64 / 24.0).sin()
                + 0.3 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin()
        })
        .collect()
}

fn knn_detector(distance: DistanceMeasure, representation: RepresentationPipeline) -> AnomalyDetector {
    AnomalyDetector::new(
        SlidingWindow::new(16, 1).unwrap(),
        Context::local_symmetric(64),
        SlidingWindow::new(16, 1).unwrap(),
        Evaluator::Knn(KnnEvaluator::new(3, distance).unwrap()),
        Box::new(MaxAggregator::new()),
        representation,
    )
    .unwrap()
}

fn bench_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("detector");

    for size in [256, 512, 1024].iter() {
        let signal = generate_signal(*size);

        group.bench_with_input(BenchmarkId::new("knn_euclidean", size), size, |b, _| {
            let mut detector = knn_detector(DistanceMeasure::Euclidean, RepresentationPipeline::identity());
            b.iter(|| detector.evaluate(black_box(&signal)))
        });

        group.bench_with_input(BenchmarkId::new("knn_cdm_sax", size), size, |b, _| {
            let pipeline = RepresentationPipeline::new(vec![Converter::Sax {
                dimensions: 8,
                alphabet_size: 5,
            }]);
            let mut detector = knn_detector(DistanceMeasure::Cdm, pipeline);
            b.iter(|| detector.evaluate(black_box(&signal)))
        });
    }

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let signal = generate_signal(256);

    c.bench_function("dtw_64", |b| {
        b.iter(|| dtw_distance(black_box(&signal[..64]), black_box(&signal[64..128])))
    });

    c.bench_function("sax_256", |b| b.iter(|| sax(black_box(&signal), 16, 6)));

    let word = sax(&signal, 64, 8).unwrap();
    c.bench_function("kolmogorov_complexity_64", |b| {
        b.iter(|| kolmogorov_complexity(black_box(&word)))
    });
}

criterion_group!(benches, bench_detector, bench_primitives);
criterion_main!(benches);
