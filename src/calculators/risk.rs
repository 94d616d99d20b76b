//! Risk-ratio engine for randomized trials
//!
//! | Metric | Formula |
//! |--------|---------|
//! | EER | a / (a + b) |
//! | CER | c / (c + d) |
//! | RR  | EER / CER |
//! | ARR | CER − EER |
//! | NNT/NNH | ⌈1 / \|ARR\|⌉ |
//!
//! NNT is taken from the counts as `⌈(a+b)(c+d) / |c(a+b) − a(c+d)|⌉`,
//! which equals `⌈1/|ARR|⌉` without the rounding of the two event rates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::types::{strict, AnalysisOptions, Calculate, ExposureTable, Guard, Quality};
use crate::format::{fit, format_dec, format_pct};

/// Direction of the treatment effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Treatment lowered the event rate (ARR > 0)
    Benefit,
    /// Treatment raised the event rate (ARR < 0)
    Harm,
    /// |ARR| below [`AnalysisOptions::no_difference_threshold`]
    NoDifference,
}

/// Whole number of patients per additional outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberNeeded {
    /// Number needed to treat to prevent one bad outcome
    Treat(u64),
    /// Number treated for one additional bad outcome
    Harm(u64),
}

impl NumberNeeded {
    pub fn value(&self) -> u64 {
        match self {
            NumberNeeded::Treat(n) | NumberNeeded::Harm(n) => *n,
        }
    }
}

/// Result of [`risk_ratio`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// a + b
    pub total_treatment: f64,
    /// c + d
    pub total_control: f64,
    /// Experimental event rate
    pub eer: f64,
    /// Control event rate
    pub cer: f64,
    /// Relative risk
    pub rr: f64,
    /// Absolute risk reduction (signed)
    pub arr: f64,
    /// ⌈1/|ARR|⌉, or 0 when ARR is exactly 0
    pub nnt: f64,
    /// ARR > 0
    pub is_benefit: bool,
    pub effect: Effect,
    pub quality: Quality,
}

impl RiskResult {
    /// NNT when the treatment helps, NNH when it harms, `None` when there is no difference
    pub fn number_needed(&self) -> Option<NumberNeeded> {
        let n = self.nnt as u64;
        match self.effect {
            Effect::NoDifference => None,
            Effect::Benefit => Some(NumberNeeded::Treat(n)),
            Effect::Harm => Some(NumberNeeded::Harm(n)),
        }
    }

    /// 1 − RR, `None` when RR is undefined
    pub fn relative_risk_reduction(&self) -> Option<f64> {
        if self.quality.is_undefined("rr") {
            None
        } else {
            Some(1.0 - self.rr)
        }
    }

    pub fn is_defined(&self, metric: &str) -> bool {
        !self.quality.is_undefined(metric)
    }

    /// Clinical reading of the numbers
    pub fn interpretation(&self) -> String {
        let abs_arr = format_pct(self.arr.abs());
        match self.effect {
            Effect::NoDifference => "There is no clinically significant difference in risk between the treatment and control groups based on these numbers.".to_string(),
            Effect::Benefit => format!(
                "The treatment reduces the absolute risk of the bad outcome by {}. This means you would need to treat approximately {} people (NNT) to prevent one additional bad outcome compared to the control.",
                abs_arr, self.nnt
            ),
            Effect::Harm => format!(
                "The treatment increases the absolute risk of the bad outcome by {}. This means for every {} people treated (NNH), one additional bad outcome is observed compared to the control.",
                abs_arr, self.nnt
            ),
        }
    }

    pub fn to_params(&self) -> HashMap<&'static str, f64> {
        let mut p = HashMap::new();
        p.insert("eer", self.eer);
        p.insert("cer", self.cer);
        p.insert("rr", self.rr);
        p.insert("arr", self.arr);
        p.insert("nnt", self.nnt);
        p
    }

    /// Ordered parameters; undefined ratios and a missing NNT/NNH are `None`
    pub fn to_row(&self) -> Vec<(&'static str, Option<f64>)> {
        let q = &self.quality;
        let nnt = if q.is_undefined("nnt") {
            None
        } else {
            self.number_needed().map(|n| n.value() as f64)
        };
        vec![
            ("total_treatment", Some(self.total_treatment)),
            ("total_control", Some(self.total_control)),
            strict(q, "eer", self.eer),
            strict(q, "cer", self.cer),
            strict(q, "rr", self.rr),
            strict(q, "arr", self.arr),
            ("nnt", nnt),
        ]
    }
}

impl fmt::Display for RiskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║           Risk Results               ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║   EER:     {:>10}                ║", format_pct(self.eer))?;
        writeln!(f, "║   CER:     {:>10}                ║", format_pct(self.cer))?;
        writeln!(f, "║   RR:      {:>10}                ║", format_dec(self.rr))?;
        writeln!(f, "║   ARR:     {:>10}                ║", format_pct(self.arr))?;
        match self.number_needed() {
            Some(NumberNeeded::Treat(n)) => writeln!(f, "║   NNT:     {:>10}                ║", n)?,
            Some(NumberNeeded::Harm(n)) => writeln!(f, "║   NNH:     {:>10}                ║", n)?,
            None => writeln!(f, "║   No measurable difference           ║")?,
        }
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

/// Risk metrics with default options
pub fn risk_ratio(table: &ExposureTable) -> RiskResult {
    risk_ratio_with(table, &AnalysisOptions::default())
}

/// Risk metrics with explicit options
pub fn risk_ratio_with(table: &ExposureTable, options: &AnalysisOptions) -> RiskResult {
    let mut guard = Guard::default();
    guard.check_counts(&table.cells());

    let total_treatment = table.a + table.b;
    let total_control = table.c + table.d;

    let eer = guard.divide("eer", table.a, total_treatment);
    let cer = guard.divide("cer", table.c, total_control);
    let rr = guard.divide("rr", eer, cer);
    guard.propagate("rr", &["eer"]);

    let arr = cer - eer;
    guard.propagate("arr", &["eer", "cer"]);

    let nnt = number_needed_raw(table, total_treatment, total_control, arr);
    guard.propagate("nnt", &["arr"]);
    let is_benefit = arr > 0.0;

    let effect = if arr.abs() < options.no_difference_threshold || arr == 0.0 {
        Effect::NoDifference
    } else if is_benefit {
        Effect::Benefit
    } else {
        Effect::Harm
    };

    RiskResult {
        total_treatment,
        total_control,
        eer,
        cer,
        rr,
        arr,
        nnt,
        is_benefit,
        effect,
        quality: guard.finish(),
    }
}

/// ⌈1/|ARR|⌉ from the counts when both arms are populated
fn number_needed_raw(table: &ExposureTable, total_treatment: f64, total_control: f64, arr: f64) -> f64 {
    if arr == 0.0 {
        return 0.0;
    }
    let difference = (table.c * total_treatment - table.a * total_control).abs();
    if total_treatment > 0.0 && total_control > 0.0 && difference > 0.0 {
        return (total_treatment * total_control / difference).ceil();
    }
    (1.0 / arr.abs()).ceil()
}

impl Calculate for ExposureTable {
    type Output = RiskResult;

    fn calculate(&self, options: &AnalysisOptions) -> RiskResult {
        risk_ratio_with(self, options)
    }
}
