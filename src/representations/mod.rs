//! Representation converters.
//!
//! A converter maps a window (or reference subsequence) to an alternative
//! encoding before scoring. Converters are chained in a
//! [`RepresentationPipeline`]: an optional user-selected transform first, then
//! a mandatory discretization when the evaluator consumes symbols.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::core::Representation;
//! use anofox_anomaly::representations::{Converter, RepresentationPipeline};
//!
//! let pipeline = RepresentationPipeline::new(vec![
//!     Converter::ZNormalize,
//!     Converter::Sax { dimensions: 2, alphabet_size: 3 },
//! ]);
//! let word = pipeline.convert(&[1.0, 1.0, 5.0, 5.0]).unwrap();
//! assert_eq!(word, Representation::Symbolic("ac".to_string()));
//! ```

pub mod dft;
pub mod dwt;
pub mod paa;
pub mod sax;
pub mod znorm;

pub use dft::{dft, fft_real};
pub use dwt::{dwt, Wavelet};
pub use paa::paa;
pub use sax::{normal_breakpoints, sax, symbol_index};
pub use znorm::z_normalize;

use crate::config::ComponentConfig;
use crate::core::{Representation, RepresentationKind};
use crate::error::{AnomalyError, Result};

/// A single representation transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converter {
    /// Zero mean, unit variance.
    ZNormalize,
    /// Piecewise aggregate approximation to `dimensions` segments.
    Paa { dimensions: usize },
    /// Packed real DFT coefficients.
    Dft,
    /// Approximation and detail coefficients of a one-level DWT.
    Dwt { wavelet: Wavelet },
    /// SAX word with `dimensions` symbols over `alphabet_size` letters.
    Sax {
        dimensions: usize,
        alphabet_size: usize,
    },
}

impl Converter {
    /// Build a converter from an option record.
    ///
    /// Recognized methods: `z-normalize`, `paa` (`dimensions`), `dft`,
    /// `dwt` (`wavelet_family`), `sax` (`dimensions`, `alphabet_size`).
    pub fn from_config(config: &ComponentConfig) -> Result<Self> {
        let method = config.method_or("")?;
        match method.as_str() {
            "z-normalize" | "znorm" => Ok(Converter::ZNormalize),
            "paa" => Ok(Converter::Paa {
                dimensions: config.usize_required("dimensions")?,
            }),
            "dft" => Ok(Converter::Dft),
            "dwt" => Ok(Converter::Dwt {
                wavelet: Wavelet::from_name(&config.string_or("wavelet_family", "db1")?)?,
            }),
            "sax" => {
                let alphabet_size = config.usize_required("alphabet_size")?;
                // Fail at construction rather than on the first window.
                normal_breakpoints(alphabet_size)?;
                Ok(Converter::Sax {
                    dimensions: config.usize_required("dimensions")?,
                    alphabet_size,
                })
            }
            other => Err(AnomalyError::config(
                "method",
                format!("unknown representation method \"{other}\""),
            )),
        }
    }

    /// Kind of representation this converter produces.
    pub fn output_kind(&self) -> RepresentationKind {
        match self {
            Converter::Sax { .. } => RepresentationKind::Symbolic,
            _ => RepresentationKind::Continuous,
        }
    }

    /// Apply the converter. All converters require continuous input.
    pub fn convert(&self, input: &Representation) -> Result<Representation> {
        let values = input.as_continuous()?;
        let output = match self {
            Converter::ZNormalize => Representation::Continuous(z_normalize(values)),
            Converter::Paa { dimensions } => Representation::Continuous(paa(values, *dimensions)?),
            Converter::Dft => Representation::Continuous(dft(values)),
            Converter::Dwt { wavelet } => Representation::Continuous(dwt(values, *wavelet)),
            Converter::Sax {
                dimensions,
                alphabet_size,
            } => Representation::Symbolic(sax(values, *dimensions, *alphabet_size)?),
        };
        Ok(output)
    }
}

/// Ordered chain of converters applied to every window and reference.
///
/// An empty pipeline passes the raw samples through as a continuous
/// representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepresentationPipeline {
    stages: Vec<Converter>,
}

impl RepresentationPipeline {
    /// Pipeline applying `stages` in order.
    pub fn new(stages: Vec<Converter>) -> Self {
        Self { stages }
    }

    /// Pipeline that leaves the raw samples unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Compose a pipeline from optional option records.
    ///
    /// When `symbolic_input` is set, a discretization record is mandatory and
    /// its converter is chained after the representation. Errors inside a
    /// record are qualified with `representation.` or `discretization.`.
    pub fn from_configs(
        representation: Option<&ComponentConfig>,
        discretization: Option<&ComponentConfig>,
        symbolic_input: bool,
    ) -> Result<Self> {
        let mut stages = Vec::new();
        if let Some(cfg) = representation {
            stages.push(Converter::from_config(cfg).map_err(|e| e.in_component("representation"))?);
        }

        if symbolic_input {
            let cfg = discretization.ok_or_else(|| {
                AnomalyError::config(
                    "discretization",
                    "a discretization is required by the selected distance measure",
                )
            })?;
            let converter =
                Converter::from_config(cfg).map_err(|e| e.in_component("discretization"))?;
            if converter.output_kind() != RepresentationKind::Symbolic {
                return Err(AnomalyError::config(
                    "discretization",
                    "discretization method must produce symbolic output",
                ));
            }
            stages.push(converter);
        }

        Ok(Self::new(stages))
    }

    /// Converter stages in application order.
    pub fn stages(&self) -> &[Converter] {
        &self.stages
    }

    /// Kind of representation produced by the pipeline.
    pub fn output_kind(&self) -> RepresentationKind {
        self.stages
            .last()
            .map_or(RepresentationKind::Continuous, Converter::output_kind)
    }

    /// Convert raw samples.
    pub fn convert(&self, data: &[f64]) -> Result<Representation> {
        let mut current = Representation::from(data);
        for stage in &self.stages {
            current = stage.convert(&current)?;
        }
        Ok(current)
    }

    /// Convert every subsequence of a reference set.
    pub fn convert_all(&self, references: &[&[f64]]) -> Result<Vec<Representation>> {
        references.iter().map(|r| self.convert(r)).collect()
    }
}
