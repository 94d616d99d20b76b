//! Diagnostic accuracy against a gold standard
//!
//! | Parameter | Formula | Depends on prevalence |
//! |-----------|---------|-----------------------|
//! | Sensitivity | TP / (TP + FN) | no |
//! | Specificity | TN / (FP + TN) | no |
//! | PPV | TP / (TP + FP) | yes |
//! | NPV | TN / (FN + TN) | yes |
//! | LR+ | Sens / (1 − Spec) | no |
//! | LR− | (1 − Sens) / Spec | no |
//! | Prevalence | (TP + FN) / N | — |
//!
//! LR± are evaluated from cross-products of the counts,
//! `TP·(FP+TN) / (FP·(TP+FN))` and `FN·(FP+TN) / (TN·(TP+FN))`, so a
//! table whose LR sits exactly on a band bound is banded by that bound.
//!
//! Likelihood ratios are banded on two independent scales, see
//! [`LikelihoodBand::positive`] and [`LikelihoodBand::negative`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::types::{strict, AnalysisOptions, Calculate, Guard, Quality};
use crate::format::{fit, format_dec, format_pct};

/// Test result vs. gold-standard 2×2 table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticTable {
    /// Test +, disease +
    pub tp: f64,
    /// Test +, disease −
    pub fp: f64,
    /// Test −, disease +
    #[serde(rename = "fn")]
    pub fn_: f64,
    /// Test −, disease −
    pub tn: f64,
}

impl DiagnosticTable {
    pub fn new(tp: f64, fp: f64, fn_: f64, tn: f64) -> Self {
        Self { tp, fp, fn_, tn }
    }

    fn cells(&self) -> [(&'static str, f64); 4] {
        [("tp", self.tp), ("fp", self.fp), ("fn", self.fn_), ("tn", self.tn)]
    }
}

impl Default for DiagnosticTable {
    /// The table the diagnostic calculator opens with
    fn default() -> Self {
        Self::new(80.0, 10.0, 20.0, 90.0)
    }
}

/// Qualitative effect of a likelihood ratio on disease probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikelihoodBand {
    LargeIncrease,
    ModerateIncrease,
    SmallIncrease,
    LargeDecrease,
    ModerateDecrease,
    SmallDecrease,
    /// Little to no change
    Negligible,
}

// Lower bounds, highest first; a value at a bound belongs to that band.
const POSITIVE_BANDS: [(f64, LikelihoodBand); 3] = [
    (10.0, LikelihoodBand::LargeIncrease),
    (5.0, LikelihoodBand::ModerateIncrease),
    (2.0, LikelihoodBand::SmallIncrease),
];

// Upper bounds, lowest first; a value at a bound belongs to that band.
const NEGATIVE_BANDS: [(f64, LikelihoodBand); 3] = [
    (0.1, LikelihoodBand::LargeDecrease),
    (0.2, LikelihoodBand::ModerateDecrease),
    (0.5, LikelihoodBand::SmallDecrease),
];

impl LikelihoodBand {
    /// Band for LR+: `>10` large, `[5,10]` moderate, `[2,5)` small
    pub fn positive(lr: f64) -> Self {
        // LR+ of exactly 10 is moderate, not large
        if lr > POSITIVE_BANDS[0].0 {
            return POSITIVE_BANDS[0].1;
        }
        POSITIVE_BANDS[1..]
            .iter()
            .find(|(bound, _)| lr >= *bound)
            .map(|(_, band)| *band)
            .unwrap_or(LikelihoodBand::Negligible)
    }

    /// Band for LR−: `<0.1` large, `[0.1,0.2]` moderate, `(0.2,0.5]` small
    pub fn negative(lr: f64) -> Self {
        // LR− of exactly 0.1 is moderate, not large
        if lr < NEGATIVE_BANDS[0].0 {
            return NEGATIVE_BANDS[0].1;
        }
        NEGATIVE_BANDS[1..]
            .iter()
            .find(|(bound, _)| lr <= *bound)
            .map(|(_, band)| *band)
            .unwrap_or(LikelihoodBand::Negligible)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LikelihoodBand::LargeIncrease => "Large increase in disease likelihood",
            LikelihoodBand::ModerateIncrease => "Moderate increase in disease likelihood",
            LikelihoodBand::SmallIncrease => "Small increase in disease likelihood",
            LikelihoodBand::LargeDecrease => "Large decrease in disease likelihood",
            LikelihoodBand::ModerateDecrease => "Moderate decrease in disease likelihood",
            LikelihoodBand::SmallDecrease => "Small decrease in disease likelihood",
            LikelihoodBand::Negligible => "Little to no change in likelihood",
        }
    }
}

impl fmt::Display for LikelihoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`diagnostic_accuracy`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// TP + FN
    pub disease_pos: f64,
    /// FP + TN
    pub disease_neg: f64,
    /// TP + FP
    pub test_pos: f64,
    /// FN + TN
    pub test_neg: f64,
    pub population: f64,

    pub sensitivity: f64,
    pub specificity: f64,
    pub ppv: f64,
    pub npv: f64,
    pub lr_positive: f64,
    pub lr_negative: f64,
    pub prevalence: f64,

    pub lr_positive_band: LikelihoodBand,
    pub lr_negative_band: LikelihoodBand,

    pub quality: Quality,
}

impl DiagnosticResult {
    pub fn is_defined(&self, metric: &str) -> bool {
        !self.quality.is_undefined(metric)
    }

    pub fn interpretation(&self) -> String {
        format!(
            "A positive result: {} (LR+ = {}). A negative result: {} (LR- = {}).",
            self.lr_positive_band.label(),
            format_dec(self.lr_positive),
            self.lr_negative_band.label(),
            format_dec(self.lr_negative)
        )
    }

    pub fn to_params(&self) -> HashMap<&'static str, f64> {
        let mut p = HashMap::new();
        p.insert("sensitivity", self.sensitivity);
        p.insert("specificity", self.specificity);
        p.insert("ppv", self.ppv);
        p.insert("npv", self.npv);
        p.insert("lr_positive", self.lr_positive);
        p.insert("lr_negative", self.lr_negative);
        p.insert("prevalence", self.prevalence);
        p
    }

    /// Ordered parameters: stable properties, then prevalence-dependent ones
    pub fn to_row(&self) -> Vec<(&'static str, Option<f64>)> {
        let q = &self.quality;
        vec![
            strict(q, "sensitivity", self.sensitivity),
            strict(q, "specificity", self.specificity),
            strict(q, "lr_positive", self.lr_positive),
            strict(q, "lr_negative", self.lr_negative),
            strict(q, "prevalence", self.prevalence),
            strict(q, "ppv", self.ppv),
            strict(q, "npv", self.npv),
        ]
    }
}

impl fmt::Display for DiagnosticResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║       Diagnostic Accuracy            ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ STABLE PROPERTIES                    ║")?;
        writeln!(f, "║   Sens:    {:>10}                ║", format_pct(self.sensitivity))?;
        writeln!(f, "║   Spec:    {:>10}                ║", format_pct(self.specificity))?;
        writeln!(f, "║   LR+:     {:>10}                ║", format_dec(self.lr_positive))?;
        writeln!(f, "║   LR-:     {:>10}                ║", format_dec(self.lr_negative))?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ PREVALENCE-DEPENDENT                 ║")?;
        writeln!(f, "║   Prev:    {:>10}                ║", format_pct(self.prevalence))?;
        writeln!(f, "║   PPV:     {:>10}                ║", format_pct(self.ppv))?;
        writeln!(f, "║   NPV:     {:>10}                ║", format_pct(self.npv))?;
        if !self.quality.is_empty() {
            writeln!(f, "╠══════════════════════════════════════╣")?;
            writeln!(f, "║ WARNINGS                             ║")?;
            for w in &self.quality.warnings {
                writeln!(f, "║   • {:<32} ║", fit(&w.to_string(), 32))?;
            }
        }
        writeln!(f, "╚══════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Sensitivity, specificity, predictive values and likelihood ratios
///
/// ```rust
/// use ebmstat::prelude::*;
///
/// let r = diagnostic_accuracy(&DiagnosticTable::new(80.0, 10.0, 20.0, 90.0));
/// assert_eq!(r.lr_positive_band, LikelihoodBand::ModerateIncrease);
/// ```
pub fn diagnostic_accuracy(table: &DiagnosticTable) -> DiagnosticResult {
    let mut guard = Guard::default();
    guard.check_counts(&table.cells());

    let disease_pos = table.tp + table.fn_;
    let disease_neg = table.fp + table.tn;
    let test_pos = table.tp + table.fp;
    let test_neg = table.fn_ + table.tn;
    let population = disease_pos + disease_neg;

    let sensitivity = guard.divide("sensitivity", table.tp, disease_pos);
    let specificity = guard.divide("specificity", table.tn, disease_neg);
    let ppv = guard.divide("ppv", table.tp, test_pos);
    let npv = guard.divide("npv", table.tn, test_neg);

    // Sens / (1 - Spec) and (1 - Sens) / Spec without the rounded rates
    let lr_positive = guard.divide("lr_positive", table.tp * disease_neg, table.fp * disease_pos);
    guard.propagate("lr_positive", &["sensitivity", "specificity"]);
    let lr_negative = guard.divide("lr_negative", table.fn_ * disease_neg, table.tn * disease_pos);
    guard.propagate("lr_negative", &["sensitivity", "specificity"]);

    let prevalence = guard.divide("prevalence", disease_pos, population);

    DiagnosticResult {
        disease_pos,
        disease_neg,
        test_pos,
        test_neg,
        population,
        sensitivity,
        specificity,
        ppv,
        npv,
        lr_positive,
        lr_negative,
        prevalence,
        lr_positive_band: LikelihoodBand::positive(lr_positive),
        lr_negative_band: LikelihoodBand::negative(lr_negative),
        quality: guard.finish(),
    }
}

impl Calculate for DiagnosticTable {
    type Output = DiagnosticResult;

    fn calculate(&self, _options: &AnalysisOptions) -> DiagnosticResult {
        diagnostic_accuracy(self)
    }
}
