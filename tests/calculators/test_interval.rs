//! Tests for confidence-interval significance

use ebmstat::prelude::*;

#[test]
fn test_entirely_negative_difference_is_significant() {
    let r = evaluate_interval(&IntervalInput::new(IntervalKind::Difference, -6.3, -1.7));
    assert!(r.valid);
    assert_eq!(r.null_value, 0.0);
    assert!(r.significant);
}

#[test]
fn test_ratio_crossing_one_is_not_significant() {
    let r = evaluate_interval(&IntervalInput::new(IntervalKind::Ratio, 0.85, 1.34));
    assert!(r.valid);
    assert_eq!(r.null_value, 1.0);
    assert!(!r.significant);
}

#[test]
fn test_difference_crossing_zero_is_not_significant() {
    let r = evaluate_interval(&IntervalInput::new(IntervalKind::Difference, -1.0, 1.0));
    assert!(!r.significant);
}

#[test]
fn test_text_bounds() {
    let bad = evaluate_interval(&IntervalInput::parse(IntervalKind::Difference, "abc", "1"));
    assert!(!bad.valid);
    assert_eq!(bad.verdict(), Significance::Indeterminate);

    let good = evaluate_interval(&IntervalInput::parse(IntervalKind::Ratio, "1.2", " 3.4 "));
    assert_eq!(good.verdict(), Significance::Significant);
}

#[test]
fn test_significance_matches_null_exclusion() {
    let bounds = [-3.0, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 3.0];
    for kind in [IntervalKind::Difference, IntervalKind::Ratio] {
        let null = kind.null_value();
        for &lower in &bounds {
            for &upper in &bounds {
                let r = evaluate_interval(&IntervalInput::new(kind, lower, upper));
                if lower > upper {
                    assert!(!r.valid);
                    assert!(!r.significant);
                } else {
                    let contains_null = lower <= null && null <= upper;
                    assert_eq!(r.significant, !contains_null, "{:?} [{}, {}]", kind, lower, upper);
                }
            }
        }
    }
}

#[test]
fn test_idempotent() {
    for input in [
        IntervalInput::new(IntervalKind::Ratio, 0.85, 1.34),
        IntervalInput::new(IntervalKind::Difference, -6.3, -1.7),
        IntervalInput::parse(IntervalKind::Difference, "abc", "1"),
    ] {
        let first = evaluate_interval(&input);
        let second = evaluate_interval(&input);
        assert_eq!(first.lower.to_bits(), second.lower.to_bits());
        assert_eq!(first.verdict(), second.verdict());
        assert_eq!(first.interpretation(), second.interpretation());
    }
}
