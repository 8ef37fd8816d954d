//! Option records used to construct detector components.
//!
//! Every component is described by a [`ComponentConfig`]: a mapping from
//! option name to value with a `method` key selecting the variant. A full
//! detector is described by a [`DetectorConfig`], which can be deserialized
//! from JSON.
//!
//! # Example
//!
//! ```
//! use anofox_anomaly::config::ComponentConfig;
//!
//! let knn = ComponentConfig::new("knn").with("k", 5).with("distance_measure", "dtw");
//! assert_eq!(knn.method_or("svm").unwrap(), "knn");
//! assert_eq!(knn.usize_or("k", 3).unwrap(), 5);
//! ```

use crate::error::{AnomalyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Option record for one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentConfig {
    options: BTreeMap<String, Value>,
}

impl ComponentConfig {
    /// Create a record selecting the given method.
    pub fn new(method: &str) -> Self {
        Self::default().with("method", method)
    }

    /// Set an option.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Raw access to an option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Check whether an option is present.
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// The selected method, or `default` if none was given.
    pub fn method_or(&self, default: &str) -> Result<String> {
        self.string_or("method", default)
    }

    /// A string option, or `default` if absent.
    pub fn string_or(&self, key: &str, default: &str) -> Result<String> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(AnomalyError::config(
                key,
                format!("expected a string, got {other}"),
            )),
        }
    }

    /// A non-negative integer option, if present.
    ///
    /// Accepts JSON integers, floats with an integral value and numeric strings.
    pub fn usize_opt(&self, key: &str) -> Result<Option<usize>> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => parse_usize(key, value).map(Some),
        }
    }

    /// A non-negative integer option, or `default` if absent.
    pub fn usize_or(&self, key: &str, default: usize) -> Result<usize> {
        Ok(self.usize_opt(key)?.unwrap_or(default))
    }

    /// A required non-negative integer option.
    pub fn usize_required(&self, key: &str) -> Result<usize> {
        self.usize_opt(key)?
            .ok_or_else(|| AnomalyError::config(key, "missing required parameter"))
    }

    /// A real-valued option, or `default` if absent.
    pub fn f64_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| AnomalyError::config(key, format!("{n} is not a real number"))),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AnomalyError::config(key, format!("\"{s}\" is not a real number"))),
            Some(other) => Err(AnomalyError::config(
                key,
                format!("expected a number, got {other}"),
            )),
        }
    }

    /// A numeric array option, if present.
    pub fn f64_vec_opt(&self, key: &str) -> Result<Option<Vec<f64>>> {
        match self.options.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| {
                    v.as_f64().ok_or_else(|| {
                        AnomalyError::config(key, format!("array element {v} is not a number"))
                    })
                })
                .collect::<Result<Vec<f64>>>()
                .map(Some),
            Some(other) => Err(AnomalyError::config(
                key,
                format!("expected an array of numbers, got {other}"),
            )),
        }
    }
}

fn parse_usize(key: &str, value: &Value) -> Result<usize> {
    let invalid = || AnomalyError::config(key, format!("{value} is not a non-negative integer"));

    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return usize::try_from(u).map_err(|_| invalid());
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => {
                    Ok(f as usize)
                }
                _ => Err(invalid()),
            }
        }
        Value::String(s) => s.trim().parse::<usize>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Option records for a complete detector.
///
/// `representation` is optional. `discretization` is required when the
/// evaluator uses a distance over symbolic input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Filter producing the windows to score.
    pub evaluation_filter: ComponentConfig,
    /// Context function selecting comparison data.
    pub context: ComponentConfig,
    /// Filter turning a context into a reference set.
    pub reference_filter: ComponentConfig,
    /// Window scorer.
    pub evaluator: ComponentConfig,
    /// Per-index score combination.
    pub aggregator: ComponentConfig,
    /// Optional continuous representation applied before scoring.
    #[serde(default)]
    pub representation: Option<ComponentConfig>,
    /// Discretization applied last when the evaluator needs symbols.
    #[serde(default)]
    pub discretization: Option<ComponentConfig>,
}

impl DetectorConfig {
    /// Parse a detector configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AnomalyError::config("detector", e.to_string()))
    }
}
