//! Continuous and symbolic encodings of window data.

use crate::error::{AnomalyError, Result};
use std::fmt;

/// Whether a representation holds real values or symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
    /// Real-valued vector.
    Continuous,
    /// Symbol string over a bounded alphabet.
    Symbolic,
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepresentationKind::Continuous => write!(f, "continuous"),
            RepresentationKind::Symbolic => write!(f, "symbolic"),
        }
    }
}

/// A window's data after representation conversion.
///
/// Distances are only defined between representations of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// Real-valued samples or coefficients.
    Continuous(Vec<f64>),
    /// SAX word, one lowercase letter per segment (`'a'` is symbol 0).
    Symbolic(String),
}

impl Representation {
    /// The kind of this representation.
    pub fn kind(&self) -> RepresentationKind {
        match self {
            Representation::Continuous(_) => RepresentationKind::Continuous,
            Representation::Symbolic(_) => RepresentationKind::Symbolic,
        }
    }

    /// Number of values or symbols.
    pub fn len(&self) -> usize {
        match self {
            Representation::Continuous(v) => v.len(),
            Representation::Symbolic(s) => s.len(),
        }
    }

    /// Check whether the representation holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the continuous values, failing for symbolic input.
    pub fn as_continuous(&self) -> Result<&[f64]> {
        match self {
            Representation::Continuous(v) => Ok(v),
            Representation::Symbolic(_) => Err(AnomalyError::TypeMismatch {
                expected: RepresentationKind::Continuous,
                got: RepresentationKind::Symbolic,
            }),
        }
    }

    /// Borrow the symbol string, failing for continuous input.
    pub fn as_symbolic(&self) -> Result<&str> {
        match self {
            Representation::Symbolic(s) => Ok(s),
            Representation::Continuous(_) => Err(AnomalyError::TypeMismatch {
                expected: RepresentationKind::Symbolic,
                got: RepresentationKind::Continuous,
            }),
        }
    }
}

impl From<Vec<f64>> for Representation {
    fn from(values: Vec<f64>) -> Self {
        Representation::Continuous(values)
    }
}

impl From<&[f64]> for Representation {
    fn from(values: &[f64]) -> Self {
        Representation::Continuous(values.to_vec())
    }
}

impl From<String> for Representation {
    fn from(word: String) -> Self {
        Representation::Symbolic(word)
    }
}
