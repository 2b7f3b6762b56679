#![allow(clippy::struct_excessive_bools)]

/// Configuration options for the numeric literal scanner.
///
/// The default grammar is permissive: it accepts an optional sign, decimal
/// and exponent forms, the `0x` hexadecimal form, and a single trailing type
/// suffix (`l`/`L`, `f`/`F`, `d`/`D`). These options narrow it.
///
/// # Examples
///
/// ```rust
/// use textcheck::{NumericOptions, parse_numeric_literal_with};
///
/// let options = NumericOptions {
///     forbid_type_suffix: true,
///     ..Default::default()
/// };
/// assert!(parse_numeric_literal_with("1.5", options).is_ok());
/// assert!(parse_numeric_literal_with("1.5f", options).is_err());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumericOptions {
    /// Whether to reject the hexadecimal form (`0x1F`, `-0XFF`).
    ///
    /// When `true`, a `0x` prefix is reported as an invalid character at the
    /// position of the `x`.
    ///
    /// # Default
    ///
    /// `false`
    pub forbid_hex: bool,

    /// Whether to reject a trailing type suffix.
    ///
    /// When `true`, literals such as `5L`, `1.0f` and `2d` are rejected and
    /// only plain decimal, exponent and (unless `forbid_hex`) hexadecimal
    /// forms remain.
    ///
    /// # Default
    ///
    /// `false`
    pub forbid_type_suffix: bool,
}
