//! Evidence-based-medicine statistics
//!
//! `ebmstat` computes the point estimates taught alongside critical appraisal
//! of clinical studies, together with the categorical interpretation a reader
//! draws from them:
//!
//! - [`evaluate_interval`]: does a confidence interval exclude the null value?
//! - [`risk_ratio`]: EER, CER, RR, ARR and NNT/NNH from a trial 2×2 table
//! - [`odds_ratio`]: OR and association direction from a case-control table
//! - [`diagnostic_accuracy`]: sensitivity, specificity, predictive values and
//!   likelihood ratios from a test-vs-gold-standard table
//!
//! Every calculator is a total, pure function. Degenerate denominators yield
//! `0` (see [`numeric::safe_divide`]) and are flagged in the result's
//! [`Quality`] so callers that need to tell "zero" from "undefined" can do so.
//!
//! ```rust
//! use ebmstat::prelude::*;
//!
//! let result = risk_ratio(&ExposureTable::new(15.0, 85.0, 20.0, 80.0));
//! assert_eq!(result.number_needed(), Some(NumberNeeded::Treat(20)));
//! ```

pub mod calculators;
pub mod content;
pub mod error;
pub mod format;
pub mod numeric;
pub mod session;

pub use calculators::*;
pub use error::EbmError;

pub mod prelude {
    pub use crate::calculators::{
        diagnostic::{diagnostic_accuracy, DiagnosticResult, DiagnosticTable, LikelihoodBand},
        interval::{evaluate_interval, IntervalInput, IntervalKind, IntervalResult, Significance},
        odds::{odds_ratio, Association, OddsResult},
        risk::{risk_ratio, Effect, NumberNeeded, RiskResult},
        AnalysisOptions, CaseControlTable, Calculate, ExposureTable, Quality, Warning,
    };
    pub use crate::content::{QuizQuestion, Topic};
    pub use crate::numeric::{is_valid_range, safe_divide};
    pub use crate::session::Session;
    pub use crate::EbmError;
}
