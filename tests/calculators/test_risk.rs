//! Tests for the risk engine

use approx::assert_relative_eq;
use ebmstat::prelude::*;

#[test]
fn test_trial_scenario() {
    let r = risk_ratio(&ExposureTable::new(15.0, 85.0, 20.0, 80.0));

    assert_relative_eq!(r.eer, 0.15, epsilon = 1e-12);
    assert_relative_eq!(r.cer, 0.20, epsilon = 1e-12);
    assert_relative_eq!(r.rr, 0.75, epsilon = 1e-12);
    assert_relative_eq!(r.arr, 0.05, epsilon = 1e-12);
    assert!(r.is_benefit);
    assert_eq!(r.number_needed(), Some(NumberNeeded::Treat(20)));
}

#[test]
fn test_rate_identities() {
    let counts = [0.0, 1.0, 3.0, 10.0, 25.0];
    for &a in &counts {
        for &b in &counts {
            for &c in &counts {
                for &d in &counts {
                    let r = risk_ratio(&ExposureTable::new(a, b, c, d));
                    assert_eq!(r.arr, r.cer - r.eer);
                    assert_eq!(r.is_benefit, r.arr > 0.0);
                    if r.cer > 0.0 {
                        assert_eq!(r.rr, r.eer / r.cer);
                    } else {
                        assert_eq!(r.rr, 0.0);
                    }
                    if r.arr == 0.0 {
                        assert_eq!(r.number_needed(), None);
                        assert_eq!(r.nnt, 0.0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_options_from_json_change_interpretation() {
    // ARR = 0.005
    let table = ExposureTable::new(100.0, 900.0, 105.0, 895.0);
    let options = AnalysisOptions::from_json(r#"{ "no_difference_threshold": 0.01 }"#).unwrap();

    assert_eq!(table.calculate(&AnalysisOptions::default()).effect, Effect::Benefit);
    assert_eq!(table.calculate(&options).effect, Effect::NoDifference);
}

#[test]
fn test_result_serializes() {
    let r = risk_ratio(&ExposureTable::default_risk());
    let json = serde_json::to_string(&r).unwrap();
    let back: RiskResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.effect, Effect::Benefit);
    assert_eq!(back.nnt, r.nnt);
}

#[test]
fn test_idempotent() {
    let table = ExposureTable::new(7.0, 93.0, 13.0, 87.0);
    let first = risk_ratio(&table);
    let second = risk_ratio(&table);
    assert_eq!(first.rr.to_bits(), second.rr.to_bits());
    assert_eq!(first.arr.to_bits(), second.arr.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_nnt_exact_for_round_arr() {
    let r = risk_ratio(&ExposureTable::new(20.0, 80.0, 30.0, 70.0));
    assert_relative_eq!(r.arr, 0.1, epsilon = 1e-12);
    assert_eq!(r.number_needed(), Some(NumberNeeded::Treat(10)));
}
