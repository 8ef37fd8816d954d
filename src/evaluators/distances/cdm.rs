//! Compression-based dissimilarity measure over symbol strings.
//!
//! Kolmogorov complexity is approximated by the smallest output of several
//! general-purpose compressors. CDM is `C(ab) / (C(a) + C(b))`: close to 0.5
//! for near-identical strings and close to 1 for unrelated ones.

use crate::error::{AnomalyError, Result};
use bzip2::write::BzEncoder;
use flate2::write::ZlibEncoder;
use std::io::Write;

fn zlib_size(data: &[u8]) -> std::io::Result<usize> {
    let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?.len())
}

fn bzip2_size(data: &[u8]) -> std::io::Result<usize> {
    let mut encoder = BzEncoder::new(Vec::new(), bzip2::Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?.len())
}

/// Estimated Kolmogorov complexity of `s`, in compressed bytes.
pub fn kolmogorov_complexity(s: &str) -> Result<usize> {
    let bytes = s.as_bytes();
    let zlib = zlib_size(bytes).map_err(|e| AnomalyError::ComputationError(e.to_string()))?;
    let bzip2 = bzip2_size(bytes).map_err(|e| AnomalyError::ComputationError(e.to_string()))?;
    Ok(zlib.min(bzip2))
}

/// CDM of `a` and `b` given the precomputed complexity of `a`.
///
/// Lets a caller comparing one string against many compress it only once.
pub fn cdm_with_complexity(a: &str, a_complexity: usize, b: &str) -> Result<f64> {
    let b_complexity = kolmogorov_complexity(b)?;
    let mut joined = String::with_capacity(a.len() + b.len());
    joined.push_str(a);
    joined.push_str(b);
    let ab_complexity = kolmogorov_complexity(&joined)?;

    Ok(ab_complexity as f64 / (a_complexity + b_complexity) as f64)
}

/// Compression-based dissimilarity of `a` and `b`.
///
/// Concatenation order matters, so `cdm(a, b)` and `cdm(b, a)` may differ.
pub fn cdm(a: &str, b: &str) -> Result<f64> {
    cdm_with_complexity(a, kolmogorov_complexity(a)?, b)
}
