//! Mainland Chinese identity card numbers.
//!
//! Two formats are recognised:
//! - 18 characters: 17 digits followed by a check character computed with the
//!   ISO 7064 MOD 11-2 weights. The check character is a digit or `X`
//!   (either case).
//! - 15 digits (legacy): characters 6..=10 hold a `yyMMd` birth date fragment
//!   and the whole number must be a canonical base-10 integer.


use chrono::NaiveDate;

use crate::ValidationError;

const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check character for each value of `sum % 11`.
const CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

const LEGACY_LEN: usize = 15;
const MODERN_LEN: usize = 18;

/// Which identity card format an accepted number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NationalId {
    /// 15-digit number without a check character.
    Legacy,
    /// 18-character number ending in a check character.
    Modern,
}

/// Returns `true` if `input` is a well-formed identity card number.
///
/// Never panics; any malformed input, including empty strings and strings of
/// a length other than 15 or 18 characters, yields `false`.
///
/// ```rust
/// use textcheck::is_valid_national_id;
///
/// assert!(is_valid_national_id("11010519491231002X"));
/// assert!(is_valid_national_id("11010519491231002x"));
/// assert!(!is_valid_national_id("110105194912310021"));
/// assert!(!is_valid_national_id("123"));
/// ```
#[must_use]
pub fn is_valid_national_id(input: &str) -> bool {
    match check_national_id(input) {
        Ok(_) => true,
        Err(error) => {
            tracing::debug!(%error, "rejected national id");
            false
        }
    }
}

/// Validates `input` and reports which format it uses.
///
/// # Errors
///
/// Returns the reason for rejection: [`ValidationError::Empty`],
/// [`ValidationError::InvalidLength`], [`ValidationError::ExpectedDigit`],
/// [`ValidationError::ChecksumMismatch`], [`ValidationError::InvalidDate`] or
/// [`ValidationError::NotCanonicalInteger`].
pub fn check_national_id(input: &str) -> Result<NationalId, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }
    match input.chars().count() {
        LEGACY_LEN => check_legacy(input).map(|()| NationalId::Legacy),
        MODERN_LEN => check_modern(input).map(|()| NationalId::Modern),
        len => Err(ValidationError::InvalidLength(len)),
    }
}

/// Computes the check character for the first 17 characters of `digits`.
///
/// # Errors
///
/// Fails with [`ValidationError::ExpectedDigit`] on the first non-digit, or
/// [`ValidationError::UnexpectedEndOfInput`] if fewer than 17 characters are
/// given.
pub fn checksum_char(digits: &str) -> Result<char, ValidationError> {
    let mut chars = digits.chars();
    let mut sum = 0;
    let mut consumed = 0;
    // Weights first so `zip` never pulls the character after the 17th.
    for (index, (weight, ch)) in WEIGHTS.into_iter().zip(chars.by_ref()).enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or(ValidationError::ExpectedDigit { ch, index })?;
        sum += weight * digit;
        consumed += 1;
    }
    if consumed < WEIGHTS.len() {
        return Err(ValidationError::UnexpectedEndOfInput);
    }
    Ok(CHECK_CHARS[(sum % 11) as usize])
}

fn check_modern(input: &str) -> Result<(), ValidationError> {
    let expected = checksum_char(input)?;
    let found = input
        .chars()
        .nth(MODERN_LEN - 1)
        .ok_or(ValidationError::UnexpectedEndOfInput)?
        .to_ascii_uppercase();
    if found == expected {
        Ok(())
    } else {
        Err(ValidationError::ChecksumMismatch { expected, found })
    }
}

fn check_legacy(input: &str) -> Result<(), ValidationError> {
    let canonical = input
        .parse::<i64>()
        .is_ok_and(|n| n.to_string() == input);
    if !canonical {
        return Err(ValidationError::NotCanonicalInteger);
    }

    let fragment: String = input.chars().skip(6).take(5).collect();
    if parse_birth_date(&fragment).is_none() {
        return Err(ValidationError::InvalidDate(fragment));
    }
    Ok(())
}

/// Parses a five-digit `yyMMd` fragment.
///
/// Two-digit years 00–68 fall in the 2000s and 69–99 in the 1900s. The day
/// field is the single remaining digit, so `0` is the only invalid day.
fn parse_birth_date(fragment: &str) -> Option<NaiveDate> {
    if fragment.len() != 5 || !fragment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: i32 = fragment[..2].parse().ok()?;
    let month: u32 = fragment[2..4].parse().ok()?;
    let day: u32 = fragment[4..].parse().ok()?;
    let year = if yy < 69 { 2000 + yy } else { 1900 + yy };
    NaiveDate::from_ymd_opt(year, month, day)
}
