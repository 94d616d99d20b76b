//! Shared calculator types: options, input tables and quality reporting
//!
//! This module defines the pieces every calculator has in common:
//! - [`AnalysisOptions`]: configuration
//! - [`ExposureTable`] / [`CaseControlTable`]: the 2×2 inputs of the risk and odds engines
//! - [`Quality`] / [`Warning`]: what went wrong (without failing)
//! - [`Calculate`]: the uniform entry point on input records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EbmError;
use crate::numeric::{checked_divide, safe_divide};

// ============================================================================
// Configuration
// ============================================================================

/// Calculator configuration
///
/// The defaults reproduce the reference teaching tool. Every field may be
/// omitted from a JSON document; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// |ARR| below this is reported as "no clinically significant difference"
    /// (default: 0.001)
    pub no_difference_threshold: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            no_difference_threshold: 0.001,
        }
    }
}

impl AnalysisOptions {
    /// Load options from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, EbmError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Set the |ARR| threshold for the "no difference" interpretation
    pub fn with_no_difference_threshold(mut self, threshold: f64) -> Self {
        self.no_difference_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), EbmError> {
        let t = self.no_difference_threshold;
        if !t.is_finite() || t < 0.0 {
            return Err(EbmError::InvalidOption {
                option: "no_difference_threshold".to_string(),
                value: t.to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Trial 2×2 table consumed by the risk engine
///
/// | | Bad outcome | Good outcome |
/// |-|-------------|--------------|
/// | Treatment | a | b |
/// | Control   | c | d |
///
/// Counts are stored as `f64` and are not validated: negative or fractional
/// values are accepted and flagged with [`Warning::NegativeCount`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureTable {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ExposureTable {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Trial scenario shown when the risk calculator opens
    pub fn default_risk() -> Self {
        Self::new(15.0, 85.0, 20.0, 80.0)
    }

    pub(crate) fn cells(&self) -> [(&'static str, f64); 4] {
        [("a", self.a), ("b", self.b), ("c", self.c), ("d", self.d)]
    }
}

/// Case-control 2×2 table consumed by the odds engine
///
/// | | Cases | Controls |
/// |-|-------|----------|
/// | Exposed   | a | b |
/// | Unexposed | c | d |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseControlTable {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CaseControlTable {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Case-control scenario shown when the odds calculator opens
    pub fn default_odds() -> Self {
        Self::new(40.0, 20.0, 60.0, 80.0)
    }

    pub(crate) fn cells(&self) -> [(&'static str, f64); 4] {
        [("a", self.a), ("b", self.b), ("c", self.c), ("d", self.d)]
    }
}

impl From<ExposureTable> for CaseControlTable {
    fn from(t: ExposureTable) -> Self {
        Self::new(t.a, t.b, t.c, t.d)
    }
}

/// Uniform entry point implemented by every input record
///
/// ```rust
/// use ebmstat::prelude::*;
///
/// let options = AnalysisOptions::default();
/// let result = CaseControlTable::default_odds().calculate(&options);
/// assert_eq!(result.association, Association::Harmful);
/// ```
pub trait Calculate {
    type Output;

    fn calculate(&self, options: &AnalysisOptions) -> Self::Output;
}

// ============================================================================
// Quality
// ============================================================================

/// Quality notes attached to every result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    /// List of warnings
    pub warnings: Vec<Warning>,
}

impl Quality {
    /// Whether `metric` was reported as the `0` sentinel for an undefined ratio
    pub fn is_undefined(&self, metric: &str) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::UndefinedRatio { metric: m } if m == metric))
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Calculator warnings
///
/// Warnings describe the input, they never alter the numeric results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// A ratio had a non-positive denominator and was reported as `0`
    UndefinedRatio {
        /// Name of the affected metric
        metric: String,
    },
    /// A table cell is negative
    NegativeCount {
        /// Cell name
        field: String,
        /// Supplied value
        value: f64,
    },
    /// Interval bounds are not finite or are inverted
    InvalidInterval,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UndefinedRatio { metric } => {
                write!(f, "{} undefined (zero denominator)", metric)
            }
            Warning::NegativeCount { field, value } => {
                write!(f, "Negative count {} = {}", field, value)
            }
            Warning::InvalidInterval => write!(f, "Invalid interval bounds"),
        }
    }
}

/// Collects warnings while a result is being computed
#[derive(Debug, Default)]
pub(crate) struct Guard {
    warnings: Vec<Warning>,
}

impl Guard {
    /// [`safe_divide`] that remembers which metrics fell back to `0`
    pub(crate) fn divide(&mut self, metric: &'static str, numerator: f64, denominator: f64) -> f64 {
        if checked_divide(numerator, denominator).is_none() {
            tracing::debug!(metric, denominator, "zero denominator, reporting 0");
            self.mark_undefined(metric);
        }
        safe_divide(numerator, denominator)
    }

    /// Flag `metric` as undefined when any of `inputs` is
    pub(crate) fn propagate(&mut self, metric: &'static str, inputs: &[&str]) {
        if inputs.iter().any(|i| self.is_undefined(i)) {
            self.mark_undefined(metric);
        }
    }

    pub(crate) fn is_undefined(&self, metric: &str) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::UndefinedRatio { metric: m } if m == metric))
    }

    fn mark_undefined(&mut self, metric: &'static str) {
        if !self.is_undefined(metric) {
            self.warnings.push(Warning::UndefinedRatio {
                metric: metric.to_string(),
            });
        }
    }

    pub(crate) fn check_counts(&mut self, cells: &[(&'static str, f64)]) {
        for &(field, value) in cells {
            if value < 0.0 {
                tracing::warn!(field, value, "negative count in table");
                self.warnings.push(Warning::NegativeCount {
                    field: field.to_string(),
                    value,
                });
            }
        }
    }

    pub(crate) fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub(crate) fn finish(self) -> Quality {
        Quality {
            warnings: self.warnings,
        }
    }
}

/// Value for a strict row: `None` when the metric is undefined
pub(crate) fn strict(quality: &Quality, metric: &'static str, value: f64) -> (&'static str, Option<f64>) {
    if quality.is_undefined(metric) {
        (metric, None)
    } else {
        (metric, Some(value))
    }
}
