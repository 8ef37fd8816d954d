//! Tools for experimenting with detectors.
//!
//! - [`metrics`]: error measures comparing an anomaly vector to a label vector
//! - [`generation`]: synthetic random walks and anomaly injection
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::evaluation::{add_constant, best_support, random_walk, Interval};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let walk = random_walk(50, 0.0, 1.0, &mut rng).unwrap();
//! let interval = Interval::new(20, 25);
//! let anomalous = add_constant(&walk, 100.0, interval).unwrap();
//!
//! let labels: Vec<bool> = (0..50).map(|i| interval.contains(i)).collect();
//! let scores: Vec<f64> = anomalous.iter().zip(&walk).map(|(a, b)| (a - b).abs()).collect();
//! assert_eq!(best_support(&labels, &scores).unwrap(), 0.0);
//! ```

pub mod generation;
pub mod metrics;

pub use generation::{
    absolute_value, add_constant, add_noise, add_sine, bridged_random_walk, flatten, linearize,
    multiply_constant, random_walk, Interval,
};
pub use metrics::{best_support, equal_support, full_support, normalized_euclidean};
