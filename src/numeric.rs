//! Numeric guards shared by every calculator
//!
//! The calculators are total functions: a denominator that is zero (or
//! negative, or NaN) never raises, it produces a `0` result instead. The
//! strict variant [`checked_divide`] is available for callers that need to
//! tell an undefined ratio apart from a genuine zero.

/// Divide, returning `0.0` unless `denominator > 0`
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Divide, returning `None` unless `denominator > 0`
#[inline]
pub fn checked_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Both bounds are finite and ordered (`lower <= upper`)
#[inline]
pub fn is_valid_range(lower: f64, upper: f64) -> bool {
    lower.is_finite() && upper.is_finite() && lower <= upper
}

/// Parse a bound typed by the user
///
/// Unparseable text becomes `NaN`, which [`is_valid_range`] rejects. The
/// whole trimmed text must be a number: a trailing suffix such as
/// `"1.5abc"` is rejected rather than read as `1.5`.
pub fn parse_bound(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
