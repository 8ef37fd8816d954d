//! Symbolic Aggregate approXimation.
//!
//! A window is PAA-reduced, z-normalized and each segment mapped to one of
//! `alphabet_size` symbols whose bins are equiprobable under N(0, 1).

use super::paa::paa;
use super::znorm::z_normalize;
use crate::error::{AnomalyError, Result};
use crate::utils::quantile_normal;

/// Largest supported alphabet (`'a'..='z'`).
pub const MAX_ALPHABET_SIZE: usize = 26;

/// Cut points splitting N(0, 1) into `alphabet_size` equiprobable bins.
///
/// Returns `alphabet_size - 1` increasing values.
pub fn normal_breakpoints(alphabet_size: usize) -> Result<Vec<f64>> {
    if !(2..=MAX_ALPHABET_SIZE).contains(&alphabet_size) {
        return Err(AnomalyError::config(
            "alphabet_size",
            format!("must be between 2 and {MAX_ALPHABET_SIZE}, got {alphabet_size}"),
        ));
    }

    Ok((1..alphabet_size)
        .map(|i| quantile_normal(i as f64 / alphabet_size as f64))
        .collect())
}

/// Symbol index of a normalized value.
///
/// Bins are half-open `[cut[i-1], cut[i])`: a value equal to a cut point
/// belongs to the bin above it.
pub fn symbol_index(value: f64, breakpoints: &[f64]) -> usize {
    breakpoints.partition_point(|&cut| cut <= value)
}

/// Convert a symbol index to its letter.
fn symbol_char(index: usize) -> char {
    (b'a' + index as u8) as char
}

/// SAX word of `series` with `dimensions` segments.
pub fn sax(series: &[f64], dimensions: usize, alphabet_size: usize) -> Result<String> {
    let breakpoints = normal_breakpoints(alphabet_size)?;
    let reduced = paa(series, dimensions)?;
    let normalized = z_normalize(&reduced);

    Ok(normalized
        .iter()
        .map(|&v| symbol_char(symbol_index(v, &breakpoints)))
        .collect())
}
