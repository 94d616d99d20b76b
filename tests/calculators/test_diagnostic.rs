//! Tests for the diagnostic-accuracy engine

use approx::assert_relative_eq;
use ebmstat::prelude::*;

#[test]
fn test_reference_table() {
    let r = diagnostic_accuracy(&DiagnosticTable::new(80.0, 10.0, 20.0, 90.0));

    assert_relative_eq!(r.sensitivity, 0.80, epsilon = 1e-12);
    assert_relative_eq!(r.specificity, 0.90, epsilon = 1e-12);
    assert_relative_eq!(r.ppv, 0.889, epsilon = 1e-3);
    assert_relative_eq!(r.npv, 0.818, epsilon = 1e-3);
    assert_relative_eq!(r.lr_positive, 8.0, epsilon = 1e-9);
    assert_relative_eq!(r.lr_negative, 0.222, epsilon = 1e-3);
    assert_eq!(r.lr_positive_band, LikelihoodBand::ModerateIncrease);
    assert_eq!(r.lr_negative_band, LikelihoodBand::SmallDecrease);
}

#[test]
fn test_swap_symmetry() {
    let tables = [
        DiagnosticTable::new(80.0, 10.0, 20.0, 90.0),
        DiagnosticTable::new(3.0, 40.0, 7.0, 11.0),
        DiagnosticTable::new(0.0, 5.0, 5.0, 0.0),
    ];
    for t in tables {
        let r = diagnostic_accuracy(&t);
        let swapped = diagnostic_accuracy(&DiagnosticTable::new(t.tn, t.fn_, t.fp, t.tp));
        assert_eq!(r.sensitivity, swapped.specificity);
        assert_eq!(r.specificity, swapped.sensitivity);
        assert_eq!(r.ppv, swapped.npv);
        assert_eq!(r.npv, swapped.ppv);
    }
}

#[test]
fn test_lr_positive_identity() {
    let r = diagnostic_accuracy(&DiagnosticTable::new(45.0, 15.0, 5.0, 35.0));
    assert_relative_eq!(r.lr_positive, r.sensitivity / (1.0 - r.specificity), epsilon = 1e-12);
    assert_relative_eq!(r.sensitivity + (1.0 - r.sensitivity), 1.0);
}

#[test]
fn test_degenerate_table_is_total() {
    let r = diagnostic_accuracy(&DiagnosticTable::new(0.0, 0.0, 0.0, 50.0));
    assert_eq!(r.sensitivity, 0.0);
    assert_eq!(r.specificity, 1.0);
    assert_eq!(r.lr_positive_band, LikelihoodBand::Negligible);
    assert!(r.quality.is_undefined("sensitivity"));
    assert!(r.quality.is_undefined("ppv"));
}

#[test]
fn test_interpretation_mentions_bands() {
    let text = diagnostic_accuracy(&DiagnosticTable::default()).interpretation();
    assert!(text.contains("Moderate increase in disease likelihood"));
    assert!(text.contains("Small decrease in disease likelihood"));
}

#[test]
fn test_bands_at_bounds_through_tables() {
    // (tp, fp, fn, tn) with LR+ of 10 and LR- of 0.1, 0.2 exactly
    let r = diagnostic_accuracy(&DiagnosticTable::new(10.0, 1.0, 0.0, 9.0));
    assert_eq!(r.lr_positive, 10.0);
    assert_eq!(r.lr_positive_band, LikelihoodBand::ModerateIncrease);

    let r = diagnostic_accuracy(&DiagnosticTable::new(20.0, 2.0, 0.0, 18.0));
    assert_eq!(r.lr_positive, 10.0);
    assert_eq!(r.lr_positive_band, LikelihoodBand::ModerateIncrease);

    let r = diagnostic_accuracy(&DiagnosticTable::new(9.0, 0.0, 1.0, 10.0));
    assert_eq!(r.lr_negative, 0.1);
    assert_eq!(r.lr_negative_band, LikelihoodBand::ModerateDecrease);

    let r = diagnostic_accuracy(&DiagnosticTable::new(90.0, 5.0, 10.0, 95.0));
    assert_eq!(r.lr_positive, 18.0);
    assert_eq!(r.lr_positive_band, LikelihoodBand::LargeIncrease);
    assert_relative_eq!(r.lr_negative, 10.0 / 95.0, epsilon = 1e-15);
    assert_eq!(r.lr_negative_band, LikelihoodBand::ModerateDecrease);
}

#[test]
fn test_idempotent() {
    let table = DiagnosticTable::new(37.0, 11.0, 6.0, 73.0);
    let first = diagnostic_accuracy(&table);
    let second = diagnostic_accuracy(&table);
    assert_eq!(first.lr_positive.to_bits(), second.lr_positive.to_bits());
    assert_eq!(first.lr_negative.to_bits(), second.lr_negative.to_bits());
    assert_eq!(first.ppv.to_bits(), second.ppv.to_bits());
    assert_eq!(first, second);
}
