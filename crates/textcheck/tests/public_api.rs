#![expect(missing_docs)]

mod common;

use std::thread;

use textcheck::{NationalId, check_national_id, is_numeric_literal, is_valid_national_id};

use crate::common::{NATIONAL_ID_SAMPLES, NUMERIC_SAMPLES};

#[test]
fn numeric_literal_examples() {
    assert!(!is_numeric_literal(""));
    assert!(is_numeric_literal("123"));
    assert!(is_numeric_literal("-123.45e-6"));
    assert!(is_numeric_literal("0x1A"));
    assert!(!is_numeric_literal("12.3.4"));
    assert!(!is_numeric_literal("1e"));
    assert!(is_numeric_literal("5L"));
    assert!(is_numeric_literal("5.0f"));
}

#[test]
fn numeric_literal_edge_cases() {
    for valid in ["1.", ".1", "1e10", "1e+10", "0x1F", "1L", "1.0f"] {
        assert!(is_numeric_literal(valid), "{valid:?}");
    }
    for invalid in ["1e", "e1", "1.2.3", "0x", "+"] {
        assert!(!is_numeric_literal(invalid), "{invalid:?}");
    }
}

#[test]
fn national_id_examples() {
    assert!(!is_valid_national_id("123"));
    assert!(is_valid_national_id("11010519491231002X"));
    assert!(!is_valid_national_id("110105194912310020"));
    assert!(is_valid_national_id("11010519491231002x"));
    assert_eq!(
        check_national_id("110105491231002"),
        Ok(NationalId::Legacy)
    );
    assert!(!is_valid_national_id("110105491331002"));
}

#[test]
fn validators_are_safe_to_share_across_threads() {
    let expected_numeric: Vec<bool> = NUMERIC_SAMPLES.iter().map(|s| is_numeric_literal(s)).collect();
    let expected_ids: Vec<bool> = NATIONAL_ID_SAMPLES
        .iter()
        .map(|s| is_valid_national_id(s))
        .collect();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let numeric: Vec<bool> =
                        NUMERIC_SAMPLES.iter().map(|s| is_numeric_literal(s)).collect();
                    let ids: Vec<bool> = NATIONAL_ID_SAMPLES
                        .iter()
                        .map(|s| is_valid_national_id(s))
                        .collect();
                    assert_eq!(numeric, expected_numeric);
                    assert_eq!(ids, expected_ids);
                }
            });
        }
    });
}

#[cfg(feature = "patterns")]
#[test]
fn pattern_validators_are_reachable() {
    use textcheck::patterns;

    assert!(patterns::is_phone_number("13812345678"));
    assert!(patterns::is_email("user@example.com"));
    assert!(patterns::is_ipv4("10.0.0.1"));
    assert!(patterns::is_url("https://example.com/a"));
    assert!(patterns::is_postcode("100000"));
    assert_eq!(patterns::matches_pattern("[a-z]+", "abc"), Ok(true));
}
