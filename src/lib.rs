//! Convert non-negative numbers, fractions included, between positional
//! systems whose digits are arbitrary Unicode symbols.
//!
//! ```
//! use anybase::BaseSpec;
//!
//! let hex = anybase::convert("255", BaseSpec::named("decimal"), BaseSpec::named("hex")).unwrap();
//! assert_eq!(hex, "ff");
//! ```

pub mod convert;
mod conversion;
mod core;
pub mod parse;
pub mod prelude;
mod result;

pub use conversion::{BaseSpec, Conversion, Mode};
pub use crate::core::alphabet::{Alphabet, AlphabetBuilder, detect_case_foldable, validate};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, Settings};
pub use crate::core::errors::{
    AlphabetError, AlphabetNotFoundError, Diagnostic, FormatError, FormatErrorKind,
    PrecisionWarning, Severity, find_closest_alphabet,
};
pub use parse::ParsedNumber;
pub use result::{ConversionResult, Diagnostics};

/// Digits after the point produced for fractional input when no precision
/// was set.
pub const DEFAULT_PRECISION: u32 = 10;

/// Converts `input` from one base to another in strict mode.
///
/// The first diagnostic of any kind, warnings included, is returned as the
/// error.
pub fn convert(
    input: &str,
    from: impl Into<BaseSpec>,
    to: impl Into<BaseSpec>,
) -> Result<String, Diagnostic> {
    Conversion::strict(input, from)?.output_string(to, false)
}

/// Like [`convert`], with an explicit number of digits after the point.
pub fn convert_with_precision(
    input: &str,
    from: impl Into<BaseSpec>,
    to: impl Into<BaseSpec>,
    precision: u32,
) -> Result<String, Diagnostic> {
    let mut conversion = Conversion::strict(input, from)?;
    conversion.set_precision(precision)?;
    conversion.output_string(to, false)
}

#[cfg(test)]
mod tests;
