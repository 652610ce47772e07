use crate::convert::numeric::{self, Magnitude};
use crate::core::alphabet::Alphabet;
use crate::core::errors::{FormatError, FormatErrorKind};

/// Maps each symbol to its digit value in `alphabet`.
pub fn digit_values(digits: &str, alphabet: &Alphabet) -> Result<Vec<usize>, FormatError> {
    digits
        .chars()
        .enumerate()
        .map(|(position, c)| {
            alphabet.decode_char(c).ok_or_else(|| {
                FormatError::new(FormatErrorKind::InvalidCharacter, c, position, digits)
            })
        })
        .collect()
}

/// Renders a magnitude with the symbols of `alphabet`.
///
/// Zero is the alphabet's zero symbol; no other value has leading zeros.
pub fn encode(value: &Magnitude, alphabet: &Alphabet) -> String {
    numeric::to_digits(value, alphabet.base())
        .into_iter()
        .filter_map(|digit| alphabet.encode_digit(digit))
        .collect()
}

/// Decodes digit values in `base`. An empty slice is zero.
pub fn decode(values: &[usize], base: usize) -> Magnitude {
    numeric::from_digits(values, base)
}

/// Converts a non-negative integer written in `source` into `dest`.
///
/// Leading zeros in the input are dropped; the empty string is zero.
///
/// # Example
///
/// ```
/// use anybase::{Alphabet, convert::integer::convert_integer};
///
/// let binary = Alphabet::from_str("01").unwrap();
/// let decimal = Alphabet::from_str("0123456789").unwrap();
/// assert_eq!(convert_integer("1010", &binary, &decimal).unwrap(), "10");
/// ```
pub fn convert_integer(
    digits: &str,
    source: &Alphabet,
    dest: &Alphabet,
) -> Result<String, FormatError> {
    let values = digit_values(digits, source)?;
    Ok(encode(&decode(&values, source.base()), dest))
}
