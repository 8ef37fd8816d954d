//! Synthetic sequences and anomaly injection.
//!
//! Injection functions return a modified copy of the sequence; only indices
//! inside the half-open [`Interval`] change.

use crate::error::{AnomalyError, Result};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;
use std::f64::consts::PI;

/// Half-open index range `[start, end)` targeted by an injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check whether `index` lies in the interval.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Require `start <= end < len`.
    ///
    /// The exclusive end must still index the sequence, as
    /// [`linearize`] reads the value there.
    fn verify(&self, len: usize) -> Result<()> {
        if self.start > self.end {
            return Err(AnomalyError::SubsequenceOrder {
                start: self.start,
                end: self.end,
            });
        }
        if self.end >= len {
            return Err(AnomalyError::SubsequenceBounds {
                start: self.start,
                end: self.end,
                sequence_end: len.saturating_sub(1),
            });
        }
        Ok(())
    }
}

fn gaussian(mean: f64, std_dev: f64) -> Result<Normal> {
    Normal::new(mean, std_dev).map_err(|e| AnomalyError::config("stdev", e.to_string()))
}

/// Apply `f(value, index)` inside the interval.
fn map_interval<F>(sequence: &[f64], interval: Interval, mut f: F) -> Result<Vec<f64>>
where
    F: FnMut(f64, usize) -> f64,
{
    interval.verify(sequence.len())?;
    Ok(sequence
        .iter()
        .enumerate()
        .map(|(t, &x)| if interval.contains(t) { f(x, t) } else { x })
        .collect())
}

/// Random walk whose increments are drawn from N(`mean`, `std_dev`).
///
/// The first element is the first increment. `std_dev` must be positive.
pub fn random_walk<R: Rng + ?Sized>(
    length: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let step = gaussian(mean, std_dev)?;
    let mut state = 0.0;
    Ok((0..length)
        .map(|_| {
            state += step.sample(rng);
            state
        })
        .collect())
}

/// Random walk pinned to 0 at both ends (a discrete Brownian bridge).
pub fn bridged_random_walk<R: Rng + ?Sized>(
    length: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let mut walk = random_walk(length, mean, std_dev, rng)?;
    if length < 2 {
        return Ok(vec![0.0; length]);
    }

    let first = walk[0];
    let drift = walk[length - 1] - first;
    let span = (length - 1) as f64;
    for (i, x) in walk.iter_mut().enumerate() {
        *x -= first + drift * i as f64 / span;
    }
    Ok(walk)
}

/// Hold the value at `interval.start` constant over the interval.
pub fn flatten(sequence: &[f64], interval: Interval) -> Result<Vec<f64>> {
    interval.verify(sequence.len())?;
    let constant = sequence[interval.start];
    map_interval(sequence, interval, |_, _| constant)
}

/// Replace the interval by the line through its first and end points.
pub fn linearize(sequence: &[f64], interval: Interval) -> Result<Vec<f64>> {
    interval.verify(sequence.len())?;
    if interval.start == interval.end {
        return Ok(sequence.to_vec());
    }
    let (t0, t1) = (interval.start as f64, interval.end as f64);
    let (y0, y1) = (sequence[interval.start], sequence[interval.end]);
    let slope = (y1 - y0) / (t1 - t0);
    let intercept = y0 - slope * t0;
    map_interval(sequence, interval, |_, t| slope * t as f64 + intercept)
}

/// Add Gaussian noise with standard deviation `amplitude`.
pub fn add_noise<R: Rng + ?Sized>(
    sequence: &[f64],
    amplitude: f64,
    interval: Interval,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let noise = gaussian(0.0, 1.0)?;
    map_interval(sequence, interval, |x, _| x + amplitude * noise.sample(rng))
}

/// Replace values by their absolute value.
pub fn absolute_value(sequence: &[f64], interval: Interval) -> Result<Vec<f64>> {
    map_interval(sequence, interval, |x, _| x.abs())
}

/// Add a constant offset.
pub fn add_constant(sequence: &[f64], constant: f64, interval: Interval) -> Result<Vec<f64>> {
    map_interval(sequence, interval, |x, _| x + constant)
}

/// Scale by a constant factor.
pub fn multiply_constant(sequence: &[f64], constant: f64, interval: Interval) -> Result<Vec<f64>> {
    map_interval(sequence, interval, |x, _| x * constant)
}

/// Add `amplitude * sin(2πt / period)`, with `t` the absolute index.
pub fn add_sine(
    sequence: &[f64],
    amplitude: f64,
    period: f64,
    interval: Interval,
) -> Result<Vec<f64>> {
    if !(period.is_finite() && period != 0.0) {
        return Err(AnomalyError::config("period", "must be finite and non-zero"));
    }
    let angular_velocity = 2.0 * PI / period;
    map_interval(sequence, interval, |x, t| {
        x + amplitude * (angular_velocity * t as f64).sin()
    })
}
