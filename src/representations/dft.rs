//! Real-input discrete Fourier transform.

use rustfft::{num_complex::Complex64, FftPlanner};

/// Compute the FFT of a real-valued signal.
///
/// Returns the complex components for frequencies 0 to N/2.
pub fn fft_real(signal: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.truncate(n / 2 + 1);
    buffer
}

/// Real DFT coefficients packed into a vector of the input's length.
///
/// Layout: `[Re(y0), Re(y1), Im(y1), Re(y2), Im(y2), ...]`. For even lengths
/// the last entry is `Re(y[n/2])` (its imaginary part is always zero).
pub fn dft(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let spectrum = fft_real(signal);
    let Some((dc, rest)) = spectrum.split_first() else {
        return Vec::new();
    };

    let mut packed = Vec::with_capacity(n + 1);
    packed.push(dc.re);
    for c in rest {
        packed.push(c.re);
        packed.push(c.im);
    }
    packed.truncate(n);
    packed
}
