//! One-class support vector machine.
//!
//! Solves the ν-parameterised one-class dual
//!
//! ```text
//! min 0.5 αᵀQα   s.t.  0 ≤ αᵢ ≤ 1,  Σαᵢ = ν·l
//! ```
//!
//! with sequential minimal optimization over maximal violating pairs. The
//! decision function is `Σ αᵢ K(xᵢ, x) − ρ`; points with a positive value are
//! inside the learned support.

use crate::error::{AnomalyError, Result};

/// Kernel function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    /// `exp(-γ‖a − b‖²)`
    Rbf { gamma: f64 },
    /// `a · b`
    Linear,
    /// `(γ a · b + coef0)^degree`
    Poly { gamma: f64, coef0: f64, degree: i32 },
    /// `tanh(γ a · b + coef0)`
    Sigmoid { gamma: f64, coef0: f64 },
}

impl Default for Kernel {
    fn default() -> Self {
        Kernel::Rbf { gamma: 0.1 }
    }
}

impl Kernel {
    /// Look up a kernel by name with the given γ.
    pub fn from_name(name: &str, gamma: f64) -> Result<Self> {
        match name {
            "rbf" => Ok(Kernel::Rbf { gamma }),
            "linear" => Ok(Kernel::Linear),
            "poly" => Ok(Kernel::Poly {
                gamma,
                coef0: 0.0,
                degree: 3,
            }),
            "sigmoid" => Ok(Kernel::Sigmoid { gamma, coef0: 0.0 }),
            other => Err(AnomalyError::config(
                "kernel",
                format!("unknown kernel \"{other}\""),
            )),
        }
    }

    /// Evaluate the kernel on two equal-length vectors.
    pub fn compute(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(AnomalyError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        let value = match self {
            Kernel::Rbf { gamma } => {
                let sq: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
                (-gamma * sq).exp()
            }
            Kernel::Linear => dot(a, b),
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => (gamma * dot(a, b) + coef0).powi(*degree),
            Kernel::Sigmoid { gamma, coef0 } => (gamma * dot(a, b) + coef0).tanh(),
        };
        Ok(value)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneClassSvm {
    /// Kernel function.
    pub kernel: Kernel,
    /// Upper bound on the fraction of training outliers, in (0, 1].
    pub nu: f64,
    /// Stopping tolerance on the maximal violation.
    pub tolerance: f64,
    /// Maximum SMO iterations.
    pub max_iter: usize,
}

impl Default for OneClassSvm {
    fn default() -> Self {
        Self {
            kernel: Kernel::default(),
            nu: 0.1,
            tolerance: 1e-3,
            max_iter: 100_000,
        }
    }
}

/// Curvature floor for non positive-definite kernels.
const TAU: f64 = 1e-12;

impl OneClassSvm {
    /// Create a solver. `nu` must lie in (0, 1].
    pub fn new(kernel: Kernel, nu: f64) -> Result<Self> {
        if !(nu > 0.0 && nu <= 1.0) {
            return Err(AnomalyError::config(
                "nu",
                format!("must be in (0, 1], got {nu}"),
            ));
        }
        Ok(Self {
            kernel,
            nu,
            ..Default::default()
        })
    }

    /// Set maximum iterations.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set stopping tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fit the support on `samples`, which must share one length.
    pub fn fit(&self, samples: &[Vec<f64>]) -> Result<OneClassModel> {
        let l = samples.len();
        if l == 0 {
            return Err(AnomalyError::InsufficientData { needed: 1, got: 0 });
        }
        let dim = samples[0].len();
        if let Some(bad) = samples.iter().find(|s| s.len() != dim) {
            return Err(AnomalyError::LengthMismatch {
                left: dim,
                right: bad.len(),
            });
        }

        let row = |i: usize| -> Result<Vec<f64>> {
            samples
                .iter()
                .map(|s| self.kernel.compute(&samples[i], s))
                .collect()
        };
        let diag: Vec<f64> = samples
            .iter()
            .map(|s| self.kernel.compute(s, s))
            .collect::<Result<_>>()?;

        // Feasible start: the first ⌊νl⌋ multipliers at the bound, one fractional.
        let total = self.nu * l as f64;
        let full = (total.floor() as usize).min(l);
        let mut alpha = vec![0.0; l];
        for a in alpha.iter_mut().take(full) {
            *a = 1.0;
        }
        if full < l {
            alpha[full] = total - full as f64;
        }

        let mut gradient = vec![0.0; l];
        for (i, &a) in alpha.iter().enumerate() {
            if a > 0.0 {
                for (g, q) in gradient.iter_mut().zip(row(i)?) {
                    *g += a * q;
                }
            }
        }

        let mut iterations = 0;
        while iterations < self.max_iter {
            let Some((i, j)) = select_working_set(&alpha, &gradient, self.tolerance) else {
                break;
            };
            iterations += 1;

            let q_i = row(i)?;
            let q_j = row(j)?;
            let (old_i, old_j) = (alpha[i], alpha[j]);

            let mut quad = diag[i] + diag[j] - 2.0 * q_i[j];
            if quad <= 0.0 {
                quad = TAU;
            }
            let delta = (gradient[i] - gradient[j]) / quad;
            let sum = alpha[i] + alpha[j];
            alpha[i] -= delta;
            alpha[j] += delta;

            if sum > 1.0 {
                if alpha[i] > 1.0 {
                    alpha[i] = 1.0;
                    alpha[j] = sum - 1.0;
                }
            } else if alpha[j] < 0.0 {
                alpha[j] = 0.0;
                alpha[i] = sum;
            }
            if sum > 1.0 {
                if alpha[j] > 1.0 {
                    alpha[j] = 1.0;
                    alpha[i] = sum - 1.0;
                }
            } else if alpha[i] < 0.0 {
                alpha[i] = 0.0;
                alpha[j] = sum;
            }

            let d_i = alpha[i] - old_i;
            let d_j = alpha[j] - old_j;
            for (k, g) in gradient.iter_mut().enumerate() {
                *g += q_i[k] * d_i + q_j[k] * d_j;
            }
        }

        let rho = compute_rho(&alpha, &gradient);

        let (support_vectors, coefficients): (Vec<Vec<f64>>, Vec<f64>) = samples
            .iter()
            .zip(alpha.iter())
            .filter(|(_, &a)| a > 0.0)
            .map(|(s, &a)| (s.clone(), a))
            .unzip();

        tracing::debug!(
            samples = l,
            support_vectors = support_vectors.len(),
            rho,
            iterations,
            "fitted one-class svm"
        );

        Ok(OneClassModel {
            kernel: self.kernel,
            support_vectors,
            coefficients,
            rho,
        })
    }
}

/// Maximal violating pair, or `None` once the violation is below `tolerance`.
fn select_working_set(alpha: &[f64], gradient: &[f64], tolerance: f64) -> Option<(usize, usize)> {
    let mut g_max = f64::NEG_INFINITY;
    let mut g_max2 = f64::NEG_INFINITY;
    let mut i = None;
    let mut j = None;

    for (t, (&a, &g)) in alpha.iter().zip(gradient).enumerate() {
        if a < 1.0 && -g >= g_max {
            g_max = -g;
            i = Some(t);
        }
        if a > 0.0 && g >= g_max2 {
            g_max2 = g;
            j = Some(t);
        }
    }

    match (i, j) {
        (Some(i), Some(j)) if g_max + g_max2 >= tolerance && i != j => Some((i, j)),
        _ => None,
    }
}

fn compute_rho(alpha: &[f64], gradient: &[f64]) -> f64 {
    let mut upper = f64::INFINITY;
    let mut lower = f64::NEG_INFINITY;
    let mut free_sum = 0.0;
    let mut free_count = 0usize;

    for (&a, &g) in alpha.iter().zip(gradient) {
        if a >= 1.0 {
            lower = lower.max(g);
        } else if a <= 0.0 {
            upper = upper.min(g);
        } else {
            free_sum += g;
            free_count += 1;
        }
    }

    if free_count > 0 {
        free_sum / free_count as f64
    } else {
        (upper + lower) / 2.0
    }
}

/// A fitted one-class support.
#[derive(Debug, Clone, PartialEq)]
pub struct OneClassModel {
    kernel: Kernel,
    support_vectors: Vec<Vec<f64>>,
    coefficients: Vec<f64>,
    rho: f64,
}

impl OneClassModel {
    /// Number of support vectors.
    pub fn n_support(&self) -> usize {
        self.support_vectors.len()
    }

    /// Offset of the decision function.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Signed distance to the support boundary (positive inside).
    pub fn decision_function(&self, x: &[f64]) -> Result<f64> {
        let mut sum = 0.0;
        for (sv, &a) in self.support_vectors.iter().zip(&self.coefficients) {
            sum += a * self.kernel.compute(sv, x)?;
        }
        Ok(sum - self.rho)
    }

    /// Whether `x` lies inside the learned support.
    pub fn is_inlier(&self, x: &[f64]) -> Result<bool> {
        Ok(self.decision_function(x)? > 0.0)
    }
}
