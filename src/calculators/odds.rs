//! Odds-ratio engine for case-control studies
//!
//! Case-control studies start from the outcome and look backward, so the
//! population at risk is unknown and only odds can be compared:
//! `OR = (a × d) / (b × c)`.
//!
//! A table with `b × c == 0` reports `OR = 0`, which classifies as
//! [`Association::Null`] just like a true `OR = 1`. The two causes can be
//! told apart through [`OddsResult::is_defined`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::types::{strict, AnalysisOptions, CaseControlTable, Calculate, Guard, Quality};
use crate::format::format_dec;

/// Direction of the exposure/disease association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Association {
    /// OR > 1: cases were exposed more
    Harmful,
    /// 0 < OR < 1: cases were exposed less
    Protective,
    /// OR = 1, or the zero sentinel of a degenerate table
    Null,
}

impl Association {
    pub fn classify(odds_ratio: f64) -> Self {
        if odds_ratio > 1.0 {
            Association::Harmful
        } else if odds_ratio < 1.0 && odds_ratio > 0.0 {
            Association::Protective
        } else {
            Association::Null
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Association::Harmful => "Exposure is Harmful (Risk Factor)",
            Association::Protective => "Exposure is Protective",
            Association::Null => "Null (No Association)",
        }
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of [`odds_ratio`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsResult {
    /// a × d
    pub numerator: f64,
    /// b × c
    pub denominator: f64,
    pub odds_ratio: f64,
    pub association: Association,
    pub quality: Quality,
}

impl OddsResult {
    /// `false` for `"odds_ratio"` when `b × c` was not positive and the OR is the `0` sentinel
    pub fn is_defined(&self, metric: &str) -> bool {
        !self.quality.is_undefined(metric)
    }

    pub fn interpretation(&self) -> String {
        format!("OR = {}: {}", format_dec(self.odds_ratio), self.association.label())
    }

    pub fn to_params(&self) -> HashMap<&'static str, f64> {
        let mut p = HashMap::new();
        p.insert("odds_ratio", self.odds_ratio);
        p
    }

    pub fn to_row(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("numerator", Some(self.numerator)),
            ("denominator", Some(self.denominator)),
            strict(&self.quality, "odds_ratio", self.odds_ratio),
        ]
    }
}

impl fmt::Display for OddsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║           Odds Ratio                 ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║   OR:      {:>10}                ║", format_dec(self.odds_ratio))?;
        writeln!(f, "║   {:<35}║", self.association.label())?;
        writeln!(f, "╚══════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Odds ratio and association direction
///
/// ```rust
/// use ebmstat::prelude::*;
///
/// let r = odds_ratio(&CaseControlTable::new(40.0, 20.0, 60.0, 80.0));
/// assert_eq!(r.association, Association::Harmful);
/// ```
pub fn odds_ratio(table: &CaseControlTable) -> OddsResult {
    let mut guard = Guard::default();
    guard.check_counts(&table.cells());

    let numerator = table.a * table.d;
    let denominator = table.b * table.c;
    let odds_ratio = guard.divide("odds_ratio", numerator, denominator);

    OddsResult {
        numerator,
        denominator,
        odds_ratio,
        association: Association::classify(odds_ratio),
        quality: guard.finish(),
    }
}

impl Calculate for CaseControlTable {
    type Output = OddsResult;

    fn calculate(&self, _options: &AnalysisOptions) -> OddsResult {
        odds_ratio(self)
    }
}
