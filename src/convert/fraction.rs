//! Conversion of the digits after the point.
//!
//! The source fraction is held exactly; destination digits are generated one
//! past the precision in use, the extra guard digit decides rounding, and the
//! rounded digits are compared back against the source to decide exactness.

use crate::convert::integer::digit_values;
use crate::convert::numeric::{self, Fraction};
use crate::core::alphabet::Alphabet;
use crate::core::errors::{FormatError, PrecisionWarning};

/// Outcome of converting the fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionOutput {
    /// Destination symbols after the point, never empty
    pub digits: String,
    pub precision_used: u32,
    pub max_precision: u32,
    /// Whether the digits differ from the exact source value
    pub rounded: bool,
    /// Rounding carried out of the first digit; the integer part must be
    /// incremented and `digits` is a single zero
    pub carry: bool,
    /// Set when the requested precision had to be clamped
    pub warning: Option<PrecisionWarning>,
}

/// Converts fractional digits written in `source` into `dest`.
///
/// # Example
///
/// ```
/// use anybase::{Alphabet, convert::fraction::convert_fraction};
///
/// let decimal = Alphabet::from_str("0123456789").unwrap();
/// let binary = Alphabet::from_str("01").unwrap();
///
/// let half = convert_fraction("5", &decimal, &binary, 10).unwrap();
/// assert_eq!(half.digits, "1");
/// assert!(!half.rounded);
///
/// let tenth = convert_fraction("1", &decimal, &binary, 10).unwrap();
/// assert_eq!(tenth.digits, "000110011");
/// assert!(tenth.rounded);
/// ```
pub fn convert_fraction(
    digits: &str,
    source: &Alphabet,
    dest: &Alphabet,
    requested_precision: u32,
) -> Result<FractionOutput, FormatError> {
    let values = digit_values(digits, source)?;
    Ok(convert_values(&values, source.base(), dest, requested_precision))
}

/// Value-level form of [`convert_fraction`].
pub fn convert_values(
    values: &[usize],
    source_base: usize,
    dest: &Alphabet,
    requested_precision: u32,
) -> FractionOutput {
    let base = dest.base();
    let max_precision = numeric::max_precision(base);

    let (precision_used, warning) = if requested_precision > max_precision {
        tracing::warn!(
            base,
            requested = requested_precision,
            max = max_precision,
            "precision clamped"
        );
        (
            max_precision,
            Some(PrecisionWarning::Clamped {
                base,
                requested: requested_precision,
                max: max_precision,
            }),
        )
    } else {
        (requested_precision, None)
    };

    let exact_value = Fraction::from_digits(values, source_base);
    let raw = generate_digits(exact_value.clone(), base, precision_used as usize);
    tracing::trace!(?raw, "generated digits with guard");

    let (mut kept, carry) = round_guard(raw, base);
    trim_trailing_zeros(&mut kept);

    let exact = !carry && Fraction::from_digits(&kept, base).same_value(&exact_value);

    FractionOutput {
        digits: kept
            .into_iter()
            .filter_map(|digit| dest.encode_digit(digit))
            .collect(),
        precision_used,
        max_precision,
        rounded: !exact,
        carry,
        warning,
    }
}

/// Expands `fraction` in `base`, producing `precision + 1` digits (the last
/// is the guard digit). Once the running value reaches zero, one more zero
/// digit is emitted as the guard and generation stops.
fn generate_digits(mut fraction: Fraction, base: usize, precision: usize) -> Vec<usize> {
    let mut digits = Vec::with_capacity(precision + 1);
    while digits.len() <= precision {
        let exhausted = fraction.is_zero();
        digits.push(fraction.next_digit(base));
        if exhausted {
            break;
        }
    }
    digits
}

/// Drops the guard digit, rounding half up at the base's midpoint.
///
/// Returns the kept digits and whether the increment carried past the first
/// digit, in which case the kept digits are a single zero.
fn round_guard(mut digits: Vec<usize>, base: usize) -> (Vec<usize>, bool) {
    let midpoint = base.div_ceil(2);
    let Some(guard) = digits.pop() else {
        return (digits, false);
    };

    if guard < midpoint {
        return (digits, false);
    }

    for digit in digits.iter_mut().rev() {
        if *digit == base - 1 {
            *digit = 0;
        } else {
            *digit += 1;
            return (digits, false);
        }
    }

    (vec![0], true)
}

/// Removes trailing zero digits, keeping at least one digit.
fn trim_trailing_zeros(digits: &mut Vec<usize>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}
