//! Calculators for the core statistics of critical appraisal
//!
//! Each calculator is a pure function from a small input record to an
//! immutable result record. Calling it twice with the same input gives
//! bit-identical output.
//!
//! | Calculator | Input | Headline output |
//! |------------|-------|-----------------|
//! | [`evaluate_interval`] | [`IntervalInput`] | [`Significance`] |
//! | [`risk_ratio`] | [`ExposureTable`] | RR, ARR, [`NumberNeeded`] |
//! | [`odds_ratio`] | [`CaseControlTable`] | OR, [`Association`] |
//! | [`diagnostic_accuracy`] | [`DiagnosticTable`] | Sens/Spec, PPV/NPV, [`LikelihoodBand`] |
//!
//! # Zero denominators
//!
//! A ratio whose denominator is not positive is reported as `0` rather than
//! failing, so the numeric fields of a result are always defined. The
//! affected metric is recorded as a [`Warning::UndefinedRatio`] in the
//! result's [`Quality`], and `to_row()` reports it as `None`.
//!
//! ```rust
//! use ebmstat::prelude::*;
//!
//! let r = odds_ratio(&CaseControlTable::new(10.0, 0.0, 5.0, 10.0));
//! assert_eq!(r.odds_ratio, 0.0);
//! assert!(!r.is_defined("odds_ratio"));
//! ```

pub mod diagnostic;
pub mod interval;
pub mod odds;
pub mod risk;
mod types;

pub use diagnostic::{diagnostic_accuracy, DiagnosticResult, DiagnosticTable, LikelihoodBand};
pub use interval::{evaluate_interval, IntervalInput, IntervalKind, IntervalResult, Significance};
pub use odds::{odds_ratio, Association, OddsResult};
pub use risk::{risk_ratio, risk_ratio_with, Effect, NumberNeeded, RiskResult};
pub use types::{AnalysisOptions, CaseControlTable, Calculate, ExposureTable, Quality, Warning};
