//! Utility functions shared across the crate.

pub mod stats;

pub use stats::{mean, median, population_std, quantile_normal};
