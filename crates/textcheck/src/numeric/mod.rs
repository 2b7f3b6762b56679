//! Numeric literal scanner.
//!
//! A single left-to-right pass over the input bytes that decides whether the
//! whole string is a numeric literal in a permissive grammar:
//!
//! ```text
//! literal  := sign? ( hex | decimal suffix? )
//! hex      := '0' ('x' | 'X') hexdigit+
//! decimal  := mantissa ( ('e' | 'E') sign? digit+ )?
//! mantissa := digit+ ('.' digit*)? | '.' digit+
//! suffix   := 'l' | 'L' | 'f' | 'F' | 'd' | 'D'
//! ```
//!
//! The grammar above is an approximation. The scanner is a small state
//! machine over five pieces of state and its exact acceptance set includes a
//! few oddities, e.g. `1.2L` is accepted while `1e5L` is not.
//!
//! Every accepted byte is ASCII, so rejecting on the first non-ASCII byte
//! always happens at a `char` boundary and error offsets can be used to slice
//! the input.

#[cfg(test)]
mod tests;

use crate::{NumericOptions, ValidationError};

/// Lexical shape of an accepted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// No decimal point and no exponent.
    Integer,
    /// Has a decimal point or an exponent.
    Float,
    /// `0x` / `0X` prefixed.
    Hex,
}

/// Trailing type suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeSuffix {
    /// `l` or `L`.
    Long,
    /// `f` or `F`.
    Float,
    /// `d` or `D`.
    Double,
}

impl TypeSuffix {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'l' | b'L' => Some(TypeSuffix::Long),
            b'f' | b'F' => Some(TypeSuffix::Float),
            b'd' | b'D' => Some(TypeSuffix::Double),
            _ => None,
        }
    }
}

/// A string accepted by [`parse_numeric_literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericLiteral<'a> {
    /// The scanned input, sign and suffix included.
    pub text: &'a str,
    /// Whether the literal is integral, fractional/exponent or hexadecimal.
    pub kind: NumberKind,
    /// The trailing type suffix, if any.
    pub suffix: Option<TypeSuffix>,
}

/// Returns `true` if `input` is a numeric literal.
///
/// Accepts an optional leading sign, decimal digits with at most one decimal
/// point and one exponent (which may carry its own sign), the hexadecimal
/// `0x` form, and a single trailing type suffix. Never panics.
///
/// ```rust
/// use textcheck::is_numeric_literal;
///
/// assert!(is_numeric_literal("-123.45e-6"));
/// assert!(is_numeric_literal("0x1A"));
/// assert!(is_numeric_literal("5L"));
/// assert!(!is_numeric_literal("1e"));
/// assert!(!is_numeric_literal("12.3.4"));
/// ```
#[must_use]
pub fn is_numeric_literal(input: &str) -> bool {
    match parse_numeric_literal(input) {
        Ok(_) => true,
        Err(error) => {
            tracing::debug!(%error, "rejected numeric literal");
            false
        }
    }
}

/// Scans `input` with the default grammar and classifies it.
///
/// # Errors
///
/// Returns the first [`ValidationError`] the scanner hits. Offsets in the
/// error are byte offsets into `input`.
pub fn parse_numeric_literal(input: &str) -> Result<NumericLiteral<'_>, ValidationError> {
    parse_numeric_literal_with(input, NumericOptions::default())
}

/// Scans `input` with the given options and classifies it.
///
/// # Errors
///
/// Returns the first [`ValidationError`] the scanner hits, including forms
/// disabled by `options`.
pub fn parse_numeric_literal_with(
    input: &str,
    options: NumericOptions,
) -> Result<NumericLiteral<'_>, ValidationError> {
    Scanner::new(input, options).run()
}

#[allow(clippy::struct_excessive_bools)]
struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    options: NumericOptions,
    pos: usize,
    has_exponent: bool,
    has_decimal_point: bool,
    /// A `+`/`-` may appear at `pos`. Only true right after an exponent
    /// marker; the leading sign is consumed before the scan starts.
    sign_allowed: bool,
    /// A digit was consumed in the current mantissa or exponent segment.
    digit_seen: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, options: NumericOptions) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            options,
            pos: 0,
            has_exponent: false,
            has_decimal_point: false,
            sign_allowed: false,
            digit_seen: false,
        }
    }

    fn run(mut self) -> Result<NumericLiteral<'a>, ValidationError> {
        let Some(&first) = self.bytes.first() else {
            return Err(ValidationError::Empty);
        };
        if matches!(first, b'+' | b'-') {
            self.pos = 1;
        }

        if !self.options.forbid_hex && self.at_hex_prefix() {
            return self.scan_hex();
        }

        // The last byte may be a type suffix, so it is handled separately.
        let last = self.bytes.len() - 1;
        while self.pos < last {
            self.step(self.bytes[self.pos])?;
            self.pos += 1;
        }

        if let Some(&b) = self.bytes.get(self.pos) {
            return self.finish_with(b);
        }

        // Only reachable for a lone sign.
        if self.sign_allowed || !self.digit_seen {
            return Err(ValidationError::UnexpectedEndOfInput);
        }
        Ok(self.literal(None))
    }

    fn at_hex_prefix(&self) -> bool {
        self.bytes.len() > self.pos + 1
            && self.bytes[self.pos] == b'0'
            && matches!(self.bytes[self.pos + 1], b'x' | b'X')
    }

    fn scan_hex(&self) -> Result<NumericLiteral<'a>, ValidationError> {
        let start = self.pos + 2;
        if start == self.bytes.len() {
            return Err(ValidationError::UnexpectedEndOfInput);
        }
        if let Some(offset) = self.bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_hexdigit())
        {
            return Err(ValidationError::invalid_char_at(self.input, start + offset));
        }
        Ok(NumericLiteral {
            text: self.input,
            kind: NumberKind::Hex,
            suffix: None,
        })
    }

    fn step(&mut self, b: u8) -> Result<(), ValidationError> {
        match b {
            b'0'..=b'9' => {
                self.digit_seen = true;
                self.sign_allowed = false;
            }
            b'.' => {
                if self.has_exponent {
                    return Err(self.malformed("decimal point in exponent"));
                }
                if self.has_decimal_point {
                    return Err(self.malformed("second decimal point"));
                }
                self.has_decimal_point = true;
            }
            b'e' | b'E' => {
                if self.has_exponent {
                    return Err(self.malformed("second exponent marker"));
                }
                if !self.digit_seen {
                    return Err(self.malformed("exponent marker before any digit"));
                }
                self.has_exponent = true;
                self.sign_allowed = true;
            }
            b'+' | b'-' => {
                if !self.sign_allowed {
                    return Err(self.malformed("misplaced sign"));
                }
                self.sign_allowed = false;
                self.digit_seen = false;
            }
            _ => return Err(ValidationError::invalid_char_at(self.input, self.pos)),
        }
        Ok(())
    }

    fn finish_with(mut self, b: u8) -> Result<NumericLiteral<'a>, ValidationError> {
        match b {
            b'0'..=b'9' => Ok(self.literal(None)),
            b'e' | b'E' => Err(self.malformed("dangling exponent marker")),
            b'.' => {
                if self.has_decimal_point || self.has_exponent {
                    return Err(self.malformed("misplaced decimal point"));
                }
                if !self.digit_seen {
                    return Err(ValidationError::UnexpectedEndOfInput);
                }
                self.has_decimal_point = true;
                Ok(self.literal(None))
            }
            b'+' | b'-' if self.sign_allowed => Err(ValidationError::UnexpectedEndOfInput),
            b'+' | b'-' => Err(self.malformed("misplaced sign")),
            _ => {
                let Some(suffix) = TypeSuffix::from_byte(b) else {
                    return Err(ValidationError::invalid_char_at(self.input, self.pos));
                };
                if self.options.forbid_type_suffix {
                    return Err(ValidationError::invalid_char_at(self.input, self.pos));
                }
                self.finish_suffix(suffix)
            }
        }
    }

    fn finish_suffix(&self, suffix: TypeSuffix) -> Result<NumericLiteral<'a>, ValidationError> {
        match suffix {
            TypeSuffix::Float | TypeSuffix::Double if self.sign_allowed => {
                Err(self.malformed("dangling exponent marker"))
            }
            TypeSuffix::Long if self.has_exponent => {
                Err(self.malformed("long suffix on exponent form"))
            }
            _ if !self.digit_seen => Err(self.malformed("type suffix without digits")),
            _ => Ok(self.literal(Some(suffix))),
        }
    }

    fn literal(&self, suffix: Option<TypeSuffix>) -> NumericLiteral<'a> {
        let kind = if self.has_decimal_point || self.has_exponent {
            NumberKind::Float
        } else {
            NumberKind::Integer
        };
        NumericLiteral {
            text: self.input,
            kind,
            suffix,
        }
    }

    fn malformed(&self, reason: &'static str) -> ValidationError {
        ValidationError::Malformed {
            reason,
            index: self.pos,
        }
    }
}
