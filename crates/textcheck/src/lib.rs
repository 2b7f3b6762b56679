//! Stateless string validators.
//!
//! - [`is_numeric_literal`] / [`parse_numeric_literal`]: a single-pass scanner
//!   for signed decimal, exponent, hexadecimal and type-suffixed literals.
//! - [`is_valid_national_id`] / [`check_national_id`]: mainland Chinese
//!   identity card numbers, 15-digit legacy and 18-character modern forms.
//! - [`patterns`] (feature `patterns`, on by default): anchored regex checks
//!   for names, phone numbers, e-mail addresses, URLs and similar formats.
//!
//! Every function is pure and safe to call from any thread. The boolean
//! entry points never fail; the `parse_*`/`check_*` variants return the same
//! decision as a `Result` with a [`ValidationError`] explaining the first
//! rejection.
//!
//! ```rust
//! use textcheck::{check_national_id, is_numeric_literal, NationalId};
//!
//! assert!(is_numeric_literal("1e+10"));
//! assert_eq!(check_national_id("11010519491231002X"), Ok(NationalId::Modern));
//! ```

mod error;
mod national_id;
mod numeric;
mod options;
#[cfg(feature = "patterns")]
pub mod patterns;

#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use national_id::{NationalId, check_national_id, checksum_char, is_valid_national_id};
pub use numeric::{
    NumberKind, NumericLiteral, TypeSuffix, is_numeric_literal, parse_numeric_literal,
    parse_numeric_literal_with,
};
pub use options::NumericOptions;
