//! Single-level discrete wavelet transform.

use crate::error::{AnomalyError, Result};

const DB1_LO: [f64; 2] = [
    std::f64::consts::FRAC_1_SQRT_2,
    std::f64::consts::FRAC_1_SQRT_2,
];

const DB2_LO: [f64; 4] = [
    -0.129_409_522_550_921_45,
    0.224_143_868_041_857_35,
    0.836_516_303_737_469,
    0.482_962_913_144_690_25,
];

const DB3_LO: [f64; 6] = [
    0.035_226_291_885_709_53,
    -0.085_441_273_882_026_66,
    -0.135_011_020_010_254_58,
    0.459_877_502_118_491_54,
    0.806_891_509_311_092_5,
    0.332_670_552_950_082_63,
];

const DB4_LO: [f64; 8] = [
    -0.010_597_401_785_069_032,
    0.032_883_011_666_885_2,
    0.030_841_381_835_560_764,
    -0.187_034_811_719_093_09,
    -0.027_983_769_416_859_854,
    0.630_880_767_929_858_9,
    0.714_846_570_552_915_7,
    0.230_377_813_308_896_5,
];

/// Daubechies wavelet family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wavelet {
    /// Haar wavelet (`db1`).
    #[default]
    Db1,
    Db2,
    Db3,
    Db4,
}

impl Wavelet {
    /// Look up a wavelet by name (`haar`, `db1` .. `db4`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "haar" | "db1" => Ok(Wavelet::Db1),
            "db2" => Ok(Wavelet::Db2),
            "db3" => Ok(Wavelet::Db3),
            "db4" => Ok(Wavelet::Db4),
            _ => Err(AnomalyError::config(
                "wavelet_family",
                format!("unknown wavelet family \"{name}\""),
            )),
        }
    }

    /// Decomposition low-pass filter.
    pub fn dec_lo(&self) -> &'static [f64] {
        match self {
            Wavelet::Db1 => &DB1_LO,
            Wavelet::Db2 => &DB2_LO,
            Wavelet::Db3 => &DB3_LO,
            Wavelet::Db4 => &DB4_LO,
        }
    }

    /// Decomposition high-pass filter (quadrature mirror of the low-pass).
    pub fn dec_hi(&self) -> Vec<f64> {
        let lo = self.dec_lo();
        let len = lo.len();
        (0..len)
            .map(|k| {
                let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
                sign * lo[len - 1 - k]
            })
            .collect()
    }
}

/// Single-level DWT with symmetric boundary extension.
///
/// Returns the approximation coefficients followed by the detail coefficients,
/// each of length `(n + filter_len - 1) / 2`.
pub fn dwt(signal: &[f64], wavelet: Wavelet) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }

    let lo = wavelet.dec_lo();
    let hi = wavelet.dec_hi();
    let mut approx = downsample_convolve(signal, lo);
    approx.extend(downsample_convolve(signal, &hi));
    approx
}

fn downsample_convolve(signal: &[f64], filter: &[f64]) -> Vec<f64> {
    let n = signal.len() as isize;
    let out_len = (signal.len() + filter.len() - 1) / 2;

    (0..out_len)
        .map(|o| {
            let i = 2 * o as isize + 1;
            filter
                .iter()
                .enumerate()
                .map(|(j, &h)| h * signal[symmetric_index(i - j as isize, n)])
                .sum()
        })
        .collect()
}

/// Mirror an out-of-range index back into `[0, n)`, repeating the edge sample.
fn symmetric_index(mut idx: isize, n: isize) -> usize {
    let period = 2 * n;
    idx = idx.rem_euclid(period);
    if idx >= n {
        idx = period - 1 - idx;
    }
    idx as usize
}
