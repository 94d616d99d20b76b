//! Tests for the odds engine

use approx::assert_relative_eq;
use ebmstat::prelude::*;

#[test]
fn test_case_control_scenario() {
    let r = odds_ratio(&CaseControlTable::new(40.0, 20.0, 60.0, 80.0));
    assert_relative_eq!(r.odds_ratio, 2.6667, epsilon = 1e-4);
    assert_eq!(r.association, Association::Harmful);
}

#[test]
fn test_formula_and_sentinel() {
    let counts = [0.0, 1.0, 2.0, 7.0];
    for &a in &counts {
        for &b in &counts {
            for &c in &counts {
                for &d in &counts {
                    let r = odds_ratio(&CaseControlTable::new(a, b, c, d));
                    if b * c > 0.0 {
                        assert_eq!(r.odds_ratio, (a * d) / (b * c));
                        assert!(r.is_defined("odds_ratio"));
                    } else {
                        assert_eq!(r.odds_ratio, 0.0);
                        assert_eq!(r.association, Association::Null);
                        assert!(!r.is_defined("odds_ratio"));
                    }
                }
            }
        }
    }
}

#[test]
fn test_unit_and_degenerate_share_category() {
    let unit = odds_ratio(&CaseControlTable::new(5.0, 5.0, 5.0, 5.0));
    let degenerate = odds_ratio(&CaseControlTable::new(5.0, 0.0, 5.0, 5.0));
    assert_eq!(unit.association, Association::Null);
    assert_eq!(degenerate.association, Association::Null);
    assert!(unit.is_defined("odds_ratio"));
    assert!(!degenerate.is_defined("odds_ratio"));
}

#[test]
fn test_converted_from_trial_table() {
    let table: CaseControlTable = ExposureTable::new(40.0, 20.0, 60.0, 80.0).into();
    assert_eq!(table, CaseControlTable::default_odds());
}

#[test]
fn test_idempotent() {
    let table = CaseControlTable::new(13.0, 7.0, 29.0, 51.0);
    let first = odds_ratio(&table);
    let second = odds_ratio(&table);
    assert_eq!(first.odds_ratio.to_bits(), second.odds_ratio.to_bits());
    assert_eq!(first, second);
}
