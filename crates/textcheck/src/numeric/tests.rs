use rstest::rstest;

use super::*;

#[rstest]
#[case("0")]
#[case("123")]
#[case("+7")]
#[case("-123.45e-6")]
#[case("1.")]
#[case(".1")]
#[case("-.5")]
#[case("1e10")]
#[case("1E10")]
#[case("1e+10")]
#[case("1.5e-3")]
#[case("0x1F")]
#[case("0X1f")]
#[case("-0xff")]
#[case("0x1A")]
#[case("1L")]
#[case("5L")]
#[case("1.0f")]
#[case("5.0f")]
#[case("2d")]
#[case("1e5D")]
#[case("1e+5F")]
#[case("1.2L")]
#[case("007")]
fn accepts(#[case] input: &str) {
    assert!(is_numeric_literal(input), "expected {input:?} to be accepted");
}

#[rstest]
#[case("")]
#[case("+")]
#[case("-")]
#[case(".")]
#[case("1e")]
#[case("e1")]
#[case("1.2.3")]
#[case("12.3.4")]
#[case("0x")]
#[case("-0X")]
#[case("0xG")]
#[case("1e5L")]
#[case("1eL")]
#[case("1ef")]
#[case("1e+")]
#[case("1e+f")]
#[case("1e5.0")]
#[case("1e5e5")]
#[case("1-2")]
#[case("++1")]
#[case("1..")]
#[case("1 ")]
#[case(" 1")]
#[case("abc")]
#[case("1x")]
#[case("f")]
#[case("L")]
#[case("1é")]
#[case("é")]
fn rejects(#[case] input: &str) {
    assert!(!is_numeric_literal(input), "expected {input:?} to be rejected");
}

#[rstest]
#[case("42", NumberKind::Integer, None)]
#[case("-42L", NumberKind::Integer, Some(TypeSuffix::Long))]
#[case("4.2", NumberKind::Float, None)]
#[case("1.", NumberKind::Float, None)]
#[case("4e2", NumberKind::Float, None)]
#[case("4.2f", NumberKind::Float, Some(TypeSuffix::Float))]
#[case("4d", NumberKind::Integer, Some(TypeSuffix::Double))]
#[case("0xCAFE", NumberKind::Hex, None)]
#[case("0x1f", NumberKind::Hex, None)]
fn classifies(
    #[case] input: &str,
    #[case] kind: NumberKind,
    #[case] suffix: Option<TypeSuffix>,
) {
    let literal = parse_numeric_literal(input).expect("literal should scan");
    assert_eq!(literal.text, input);
    assert_eq!(literal.kind, kind);
    assert_eq!(literal.suffix, suffix);
}

#[test]
fn empty_input_reports_empty() {
    assert_eq!(parse_numeric_literal(""), Err(ValidationError::Empty));
}

#[test]
fn second_decimal_point_reports_its_offset() {
    assert_eq!(
        parse_numeric_literal("1.2.3"),
        Err(ValidationError::Malformed {
            reason: "second decimal point",
            index: 3,
        })
    );
}

#[test]
fn dangling_exponent_is_malformed() {
    assert_eq!(
        parse_numeric_literal("1e"),
        Err(ValidationError::Malformed {
            reason: "dangling exponent marker",
            index: 1,
        })
    );
}

#[test]
fn exponent_needs_a_digit_first() {
    assert_eq!(
        parse_numeric_literal("e1"),
        Err(ValidationError::Malformed {
            reason: "exponent marker before any digit",
            index: 0,
        })
    );
}

#[test]
fn bare_hex_prefix_is_unexpected_end() {
    assert_eq!(
        parse_numeric_literal("0x"),
        Err(ValidationError::UnexpectedEndOfInput)
    );
    assert_eq!(
        parse_numeric_literal("+"),
        Err(ValidationError::UnexpectedEndOfInput)
    );
}

#[test]
fn non_ascii_is_reported_as_a_whole_char() {
    assert_eq!(
        parse_numeric_literal("12é4"),
        Err(ValidationError::InvalidCharacter { ch: 'é', index: 2 })
    );
    assert_eq!(
        parse_numeric_literal("0x1€"),
        Err(ValidationError::InvalidCharacter { ch: '€', index: 3 })
    );
}

#[test]
fn forbid_hex_rejects_at_the_x() {
    let options = NumericOptions {
        forbid_hex: true,
        ..Default::default()
    };
    assert_eq!(
        parse_numeric_literal_with("0x1F", options),
        Err(ValidationError::InvalidCharacter { ch: 'x', index: 1 })
    );
    assert!(parse_numeric_literal_with("10", options).is_ok());
}

#[test]
fn forbid_type_suffix_rejects_every_suffix() {
    let options = NumericOptions {
        forbid_type_suffix: true,
        ..Default::default()
    };
    for input in ["5L", "5l", "1.0f", "1.0F", "2d", "2D"] {
        assert!(
            parse_numeric_literal_with(input, options).is_err(),
            "{input:?} should be rejected without suffixes"
        );
    }
    // Hex digits are not suffixes.
    assert!(parse_numeric_literal_with("0xFD", options).is_ok());
}

#[test]
fn default_options_match_plain_parse() {
    for input in ["1", "1.0f", "0x1", "1e", "", "1.2L"] {
        assert_eq!(
            parse_numeric_literal_with(input, NumericOptions::default()),
            parse_numeric_literal(input)
        );
    }
}
