//! Confidence-interval significance
//!
//! A 95% confidence interval is statistically significant when it excludes
//! the null value: 0 for differences (Mean A − Mean B), 1 for ratios
//! (Risk A ÷ Risk B). An interval that merely touches the null is not
//! significant.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::{AnalysisOptions, Calculate, Guard, Quality, Warning};
use crate::numeric::{is_valid_range, parse_bound};

/// Kind of summary statistic the interval belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalKind {
    /// Subtracted measures (mean difference, ARR)
    #[default]
    Difference,
    /// Divided measures (RR, OR, HR)
    Ratio,
}

impl IntervalKind {
    /// Value of the statistic that indicates no effect
    pub fn null_value(&self) -> f64 {
        match self {
            IntervalKind::Difference => 0.0,
            IntervalKind::Ratio => 1.0,
        }
    }

    /// Why the null value is what it is
    pub fn null_explanation(&self) -> &'static str {
        match self {
            IntervalKind::Difference => {
                "If the interval touches 0, there is no statistical difference (Mean A - Mean B = 0)."
            }
            IntervalKind::Ratio => {
                "If the interval touches 1, there is no statistical difference (Risk A ÷ Risk B = 1)."
            }
        }
    }
}

/// Bounds of a confidence interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalInput {
    pub kind: IntervalKind,
    pub lower: f64,
    pub upper: f64,
}

impl IntervalInput {
    pub fn new(kind: IntervalKind, lower: f64, upper: f64) -> Self {
        Self { kind, lower, upper }
    }

    /// Build from text fields; text that is not a number yields an invalid interval
    pub fn parse(kind: IntervalKind, lower: &str, upper: &str) -> Self {
        Self::new(kind, parse_bound(lower), parse_bound(upper))
    }
}

impl Default for IntervalInput {
    /// The mean-difference example the calculator opens with
    fn default() -> Self {
        Self::new(IntervalKind::Difference, -6.3, -1.7)
    }
}

/// Three-way outcome of the evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Significance {
    Significant,
    NotSignificant,
    /// Bounds were not numbers or were inverted
    Indeterminate,
}

impl Significance {
    pub fn headline(&self) -> &'static str {
        match self {
            Significance::Significant => "Statistically Significant",
            Significance::NotSignificant => "Not Statistically Significant",
            Significance::Indeterminate => "Awaiting Data",
        }
    }
}

/// Result of [`evaluate_interval`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalResult {
    pub kind: IntervalKind,
    pub lower: f64,
    pub upper: f64,
    /// Both bounds finite and `lower <= upper`
    pub valid: bool,
    pub null_value: f64,
    /// Always `false` when `valid` is `false`
    pub significant: bool,
    pub quality: Quality,
}

impl IntervalResult {
    pub fn verdict(&self) -> Significance {
        match (self.valid, self.significant) {
            (false, _) => Significance::Indeterminate,
            (true, true) => Significance::Significant,
            (true, false) => Significance::NotSignificant,
        }
    }

    /// One-line explanation of the verdict
    pub fn interpretation(&self) -> String {
        match self.verdict() {
            Significance::Indeterminate => "Enter values and click Calculate.".to_string(),
            Significance::Significant => {
                format!("The range DOES NOT touch {}.", self.null_value)
            }
            Significance::NotSignificant => {
                format!("The range TOUCHES or CROSSES {}.", self.null_value)
            }
        }
    }
}

impl fmt::Display for IntervalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║       Confidence Interval            ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ Kind:     {:<27}║", format!("{:?}", self.kind))?;
        writeln!(
            f,
            "║ Interval: {:<27}║",
            format!("{} to {}", self.lower, self.upper)
        )?;
        writeln!(f, "║ Null:     {:<27}║", self.null_value)?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ {:<37}║", self.verdict().headline())?;
        writeln!(f, "╚══════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Classify an interval against the null value of its kind
///
/// ```rust
/// use ebmstat::prelude::*;
///
/// let r = evaluate_interval(&IntervalInput::new(IntervalKind::Ratio, 0.85, 1.34));
/// assert_eq!(r.verdict(), Significance::NotSignificant);
/// ```
pub fn evaluate_interval(input: &IntervalInput) -> IntervalResult {
    let null_value = input.kind.null_value();
    let valid = is_valid_range(input.lower, input.upper);

    let mut guard = Guard::default();
    if !valid {
        guard.push(Warning::InvalidInterval);
    }

    let significant = valid && (input.upper < null_value || input.lower > null_value);

    IntervalResult {
        kind: input.kind,
        lower: input.lower,
        upper: input.upper,
        valid,
        null_value,
        significant,
        quality: guard.finish(),
    }
}

impl Calculate for IntervalInput {
    type Output = IntervalResult;

    fn calculate(&self, _options: &AnalysisOptions) -> IntervalResult {
        evaluate_interval(self)
    }
}
