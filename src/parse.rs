use crate::core::alphabet::Alphabet;
use crate::core::errors::{FormatError, FormatErrorKind};

/// Characters accepted as the decimal separator.
pub const SEPARATORS: [char; 2] = ['.', ','];

/// An input number validated against its source alphabet.
///
/// Digits are kept both as the (case-folded) input symbols and as digit
/// values. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    integer_part: String,
    fractional_part: Option<String>,
    separator: Option<char>,
    integer_values: Vec<usize>,
    fractional_values: Vec<usize>,
    alphabet: Alphabet,
}

impl ParsedNumber {
    /// Symbols before the separator; empty means zero.
    pub fn integer_part(&self) -> &str {
        &self.integer_part
    }

    /// Symbols after the separator, if there was one.
    pub fn fractional_part(&self) -> Option<&str> {
        self.fractional_part.as_deref()
    }

    pub fn separator(&self) -> Option<char> {
        self.separator
    }

    pub fn is_float(&self) -> bool {
        self.separator.is_some()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub(crate) fn integer_values(&self) -> &[usize] {
        &self.integer_values
    }

    pub(crate) fn fractional_values(&self) -> &[usize] {
        &self.fractional_values
    }
}

/// Splits `input` into integer and fractional parts, validating every
/// character against `alphabet`.
///
/// Case-foldable alphabets see the input lower-cased first. Alphabet
/// membership is checked before the separator set, so an alphabet may use
/// `.` or `,` as a digit.
///
/// # Example
///
/// ```
/// use anybase::{Alphabet, parse::parse};
///
/// let decimal = Alphabet::from_str("0123456789").unwrap();
/// let number = parse("12,5", &decimal).unwrap();
/// assert_eq!(number.integer_part(), "12");
/// assert_eq!(number.fractional_part(), Some("5"));
/// assert_eq!(number.separator(), Some(','));
///
/// assert!(parse("1.2.3", &decimal).is_err());
/// ```
pub fn parse(input: &str, alphabet: &Alphabet) -> Result<ParsedNumber, FormatError> {
    let text = if alphabet.is_case_foldable() {
        input.to_lowercase()
    } else {
        input.to_string()
    };

    let chars: Vec<char> = text.chars().collect();
    let last = chars.len().saturating_sub(1);

    let mut integer_values = Vec::with_capacity(chars.len());
    let mut fractional_values = Vec::new();
    let mut separator: Option<(usize, char)> = None;

    for (position, &c) in chars.iter().enumerate() {
        if let Some(value) = alphabet.decode_char(c) {
            if separator.is_some() {
                fractional_values.push(value);
            } else {
                integer_values.push(value);
            }
            continue;
        }

        if !SEPARATORS.contains(&c) {
            return Err(FormatError::new(
                FormatErrorKind::InvalidCharacter,
                c,
                position,
                &text,
            ));
        }
        if separator.is_some() {
            return Err(FormatError::new(
                FormatErrorKind::ExtraSeparator,
                c,
                position,
                &text,
            ));
        }
        if position == 0 || position == last {
            return Err(FormatError::new(
                FormatErrorKind::SeparatorAtEdge,
                c,
                position,
                &text,
            ));
        }
        separator = Some((position, c));
    }

    let (integer_part, fractional_part) = match separator {
        Some((position, _)) => (
            chars[..position].iter().collect(),
            Some(chars[position + 1..].iter().collect()),
        ),
        None => (text.clone(), None),
    };

    tracing::debug!(
        input = %text,
        integer = %integer_part,
        fraction = ?fractional_part,
        "parsed number"
    );

    Ok(ParsedNumber {
        integer_part,
        fractional_part,
        separator: separator.map(|(_, c)| c),
        integer_values,
        fractional_values,
        alphabet: alphabet.clone(),
    })
}
