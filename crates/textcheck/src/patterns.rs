//! Anchored regular-expression validators for common text formats.
//!
//! Every check is a full-string match. Patterns are compiled once per process
//! and shared read-only. Digit and word classes are spelled out as ASCII
//! ranges because `\d`, `\w` and `\s` are Unicode-aware in `regex`.

use std::sync::LazyLock;

use regex::Regex;

use crate::ValidationError;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("built-in pattern {pattern:?}: {e}"))
}

/// CJK unified ideographs, or Latin words separated by single whitespace.
static REAL_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:[\x{4e00}-\x{9fa5}]+|(?:[a-zA-Z]+[ \t\n\r\x0B\x0C]?)+)$"));

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\+?[0-9]{2}-?)?1[0-9][0-9]{9}$"));

static ACCOUNT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\x{4e00}-\x{9fa5}a-zA-Z0-9\-]{4,20}$"));

static PASSWORD: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9]{6,12}$"));

static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9]{6,}$"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+",
        r"(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+",
        r"[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    ))
});

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^(?:[0-9]{1,2}|1[0-9]{2}|2[0-4][0-9]|25[0-5])",
        r"(?:\.(?:[0-9]{1,2}|1[0-9]{2}|2[0-4][0-9]|25[0-5])){3}$",
    ))
});

/// Matched against the lowercased input.
static URL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:https?|ftp)://[a-z0-9_\-]+\.[a-z0-9_]{2,4}(?:/.*)?$"));

static VEHICLE_PLATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[京津晋冀蒙辽吉黑沪苏浙皖闽赣鲁豫鄂湘粤桂琼川贵云藏陕甘青宁新渝]?[A-Z][A-HJ-NP-Z0-9学挂港澳练]{5}$",
    )
});

static POSTCODE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[1-9][0-9]{5}$"));

/// Returns `true` for a personal name: either Chinese characters only, or
/// Latin words separated by single whitespace characters.
///
/// ```rust
/// use textcheck::patterns::is_real_name;
///
/// assert!(is_real_name("张三"));
/// assert!(is_real_name("John Smith"));
/// assert!(!is_real_name("John  Smith"));
/// assert!(!is_real_name("张 三"));
/// ```
#[must_use]
pub fn is_real_name(input: &str) -> bool {
    REAL_NAME.is_match(input)
}

/// Returns `true` for an 11-digit mobile number starting with `1`, optionally
/// preceded by a two-digit country code (`+86`, `86-`, `+86-`).
#[must_use]
pub fn is_phone_number(input: &str) -> bool {
    PHONE_NUMBER.is_match(input)
}

/// Returns `true` for 4–20 Chinese characters, ASCII letters, digits or `-`.
#[must_use]
pub fn is_account(input: &str) -> bool {
    ACCOUNT.is_match(input)
}

/// Returns `true` for 6–12 ASCII letters or digits.
#[must_use]
pub fn is_password(input: &str) -> bool {
    PASSWORD.is_match(input)
}

/// Returns `true` for at least 6 ASCII letters or digits containing both a
/// letter and a digit.
#[must_use]
pub fn is_mixed_password(input: &str) -> bool {
    ALPHANUMERIC.is_match(input)
        && input.bytes().any(|b| b.is_ascii_digit())
        && input.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Returns `true` for a lowercase e-mail address.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Returns `true` for a dotted-quad IPv4 address.
///
/// Octets of one or two digits may carry a leading zero (`01`); three-digit
/// octets must be `100`–`255`.
#[must_use]
pub fn is_ipv4(input: &str) -> bool {
    IPV4.is_match(input)
}

/// Returns `true` for an `http`, `https` or `ftp` URL with a single-label
/// host and a 2–4 character top-level domain. The scheme and host are
/// matched case-insensitively.
#[must_use]
pub fn is_url(input: &str) -> bool {
    URL.is_match(&input.to_lowercase())
}

/// Returns `true` for a Chinese civil vehicle plate such as `京A12345`.
#[must_use]
pub fn is_vehicle_plate(input: &str) -> bool {
    VEHICLE_PLATE.is_match(input)
}

/// Returns `true` for a six-digit Chinese postcode not starting with `0`.
#[must_use]
pub fn is_postcode(input: &str) -> bool {
    POSTCODE.is_match(input)
}

/// Returns whether the whole of `input` matches `pattern`.
///
/// The pattern is anchored on both ends; callers need not add `^`/`$`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPattern`] if `pattern` does not compile.
pub fn matches_pattern(pattern: &str, input: &str) -> Result<bool, ValidationError> {
    let anchored = format!(r"^(?:{pattern})$");
    let re = Regex::new(&anchored).map_err(|e| ValidationError::InvalidPattern(e.to_string()))?;
    Ok(re.is_match(input))
}
