use thiserror::Error;

/// Why an input was rejected.
///
/// Every validator in this crate reports its first rejection as one of these
/// variants. The boolean entry points (`is_*`) collapse them to `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty.
    #[error("input is empty")]
    Empty,
    /// A character that is not allowed at this position.
    #[error("invalid character '{ch}' at byte {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of `ch` in the input.
        index: usize,
    },
    /// A structurally misplaced token, such as a second decimal point.
    #[error("{reason} at byte {index}")]
    Malformed {
        /// Short description of the structural problem.
        reason: &'static str,
        /// Byte offset where the problem was detected.
        index: usize,
    },
    /// The input ended where more characters were required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// An identity card number of a length other than 15 or 18 characters.
    #[error("expected 15 or 18 characters, found {0}")]
    InvalidLength(usize),
    /// A non-digit where the identity card format requires a digit.
    #[error("expected a digit at position {index}, found '{ch}'")]
    ExpectedDigit {
        /// The offending character.
        ch: char,
        /// Character position in the input.
        index: usize,
    },
    /// The check character of an 18-character identity card number is wrong.
    #[error("checksum mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch {
        /// The check character computed from the first 17 digits.
        expected: char,
        /// The check character present in the input (uppercased).
        found: char,
    },
    /// The embedded birth date fragment is not a calendar date.
    #[error("invalid date fragment \"{0}\"")]
    InvalidDate(String),
    /// The input does not survive a round trip through integer parsing.
    #[error("not a canonical integer")]
    NotCanonicalInteger,
    /// A caller-supplied pattern failed to compile.
    #[cfg(feature = "patterns")]
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl ValidationError {
    /// Builds an [`InvalidCharacter`](Self::InvalidCharacter) for the
    /// character starting at byte `index` of `input`.
    pub(crate) fn invalid_char_at(input: &str, index: usize) -> Self {
        let ch = input
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ValidationError::InvalidCharacter { ch, index }
    }
}
