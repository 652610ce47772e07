use std::collections::{HashMap, HashSet};

use crate::core::errors::AlphabetError;

/// An ordered set of distinct symbols defining a positional numeral system.
///
/// The position of a symbol is its digit value, so the number of symbols is
/// the base. Alphabets are immutable once built; construction validates that
/// no symbol repeats.
///
/// # Example
///
/// ```
/// use anybase::Alphabet;
///
/// let hex = Alphabet::builder()
///     .chars("0123456789abcdef".chars())
///     .case_foldable(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(hex.base(), 16);
/// assert_eq!(hex.encode_digit(10), Some('a'));
/// assert_eq!(hex.decode_char('f'), Some(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
    case_foldable: bool,
}

impl Alphabet {
    /// Creates an alphabet from a symbol list. The result is not case-foldable.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol repeats or there are fewer than two symbols.
    pub fn new(chars: Vec<char>) -> Result<Self, AlphabetError> {
        Self::builder().chars(chars).build()
    }

    /// Creates an alphabet from the characters of a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, AlphabetError> {
        Self::new(s.chars().collect())
    }

    /// Creates a new AlphabetBuilder.
    pub fn builder() -> AlphabetBuilder {
        AlphabetBuilder::new()
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Whether input in this alphabet may be given in upper case and output
    /// may be rendered in upper case.
    pub fn is_case_foldable(&self) -> bool {
        self.case_foldable
    }

    /// Encodes a digit (0 to base-1) as a symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a symbol back to its digit value.
    ///
    /// Returns `None` if the symbol is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.char_to_index.contains_key(&c)
    }

    /// The symbol with value zero.
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    /// The symbol with the highest value (base - 1).
    pub fn max_digit(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Returns the symbols in digit order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the symbols as a string.
    pub fn digits(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Checks that a symbol sequence can serve as an alphabet.
///
/// Reports the first repeated symbol together with both of its positions.
pub fn validate(chars: &[char]) -> Result<(), AlphabetError> {
    build_index(chars).map(|_| ())
}

fn build_index(chars: &[char]) -> Result<HashMap<char, usize>, AlphabetError> {
    if chars.len() < 2 {
        return Err(AlphabetError::TooFewSymbols { len: chars.len() });
    }

    let mut char_to_index = HashMap::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if let Some(first) = char_to_index.insert(c, i) {
            return Err(AlphabetError::DuplicateSymbol {
                symbol: c,
                first,
                second: i,
            });
        }
    }
    Ok(char_to_index)
}

/// Decides whether an alphabet defined in lower case can also be written in
/// upper case: it must contain at least one letter, no upper-case letters, and
/// every upper-cased symbol must stay a single character that is distinct
/// from all other symbols, upper-cased or not.
pub fn detect_case_foldable(chars: &[char]) -> bool {
    let mut has_letter = false;
    let mut upper_forms = HashSet::with_capacity(chars.len());
    for &c in chars {
        if c.is_uppercase() {
            return false;
        }
        let mut upper = c.to_uppercase();
        let u = match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => return false,
        };
        if u != c {
            has_letter = true;
            if chars.contains(&u) {
                return false;
            }
        }
        if !upper_forms.insert(u) {
            return false;
        }
    }
    has_letter
}

/// Builder for constructing an Alphabet.
#[derive(Debug, Default)]
pub struct AlphabetBuilder {
    chars: Option<Vec<char>>,
    case_foldable: Option<bool>,
}

impl AlphabetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbols, in digit order.
    pub fn chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.chars = Some(chars.into_iter().collect());
        self
    }

    /// Marks the alphabet as case-foldable.
    ///
    /// Default is false.
    pub fn case_foldable(mut self, case_foldable: bool) -> Self {
        self.case_foldable = Some(case_foldable);
        self
    }

    /// Builds the Alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two symbols were provided
    /// - A symbol occurs more than once
    pub fn build(self) -> Result<Alphabet, AlphabetError> {
        let chars = self.chars.unwrap_or_default();
        let char_to_index = build_index(&chars)?;

        Ok(Alphabet {
            chars,
            char_to_index,
            case_foldable: self.case_foldable.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_alphabet() {
        let alphabet = Alphabet::from_str("01").unwrap();
        assert_eq!(alphabet.base(), 2);
        assert_eq!(alphabet.zero(), '0');
        assert_eq!(alphabet.max_digit(), '1');
        assert!(!alphabet.is_case_foldable());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Alphabet::from_str("aab").unwrap_err();
        assert_eq!(
            err,
            AlphabetError::DuplicateSymbol {
                symbol: 'a',
                first: 0,
                second: 1
            }
        );
    }

    #[test]
    fn test_duplicate_rejected_every_length() {
        for len in 2..40usize {
            let mut chars: Vec<char> = (0..len as u32)
                .map(|i| char::from_u32(0x4E00 + i).unwrap())
                .collect();
            assert!(validate(&chars).is_ok(), "distinct length {}", len);

            // Repeat the first symbol at the end
            chars[len - 1] = chars[0];
            assert!(validate(&chars).is_err(), "repeat length {}", len);
        }
    }

    #[test]
    fn test_too_few_symbols() {
        assert_eq!(
            Alphabet::from_str("x").unwrap_err(),
            AlphabetError::TooFewSymbols { len: 1 }
        );
        assert_eq!(
            Alphabet::from_str("").unwrap_err(),
            AlphabetError::TooFewSymbols { len: 0 }
        );
    }

    #[test]
    fn test_unicode_symbols() {
        let alphabet = Alphabet::from_str("🌑🌓🌕").unwrap();
        assert_eq!(alphabet.base(), 3);
        assert_eq!(alphabet.decode_char('🌕'), Some(2));
        assert_eq!(alphabet.encode_digit(3), None);
    }

    #[test]
    fn test_detect_case_foldable() {
        let hex: Vec<char> = "0123456789abcdef".chars().collect();
        assert!(detect_case_foldable(&hex));

        let decimal: Vec<char> = "0123456789".chars().collect();
        assert!(!detect_case_foldable(&decimal));

        let base58: Vec<char> = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"
            .chars()
            .collect();
        assert!(!detect_case_foldable(&base58));

        let base32: Vec<char> = "abcdefghijklmnopqrstuvwxyz234567".chars().collect();
        assert!(detect_case_foldable(&base32));

        // Both sigmas upper-case to Σ
        let sigmas: Vec<char> = "0σς".chars().collect();
        assert!(!detect_case_foldable(&sigmas));

        // ß upper-cases to two characters
        let eszett: Vec<char> = "0aß".chars().collect();
        assert!(!detect_case_foldable(&eszett));
    }

    #[test]
    fn test_builder_case_foldable() {
        let alphabet = Alphabet::builder()
            .chars("0123456789abcdef".chars())
            .case_foldable(true)
            .build()
            .unwrap();
        assert!(alphabet.is_case_foldable());
        assert_eq!(alphabet.digits(), "0123456789abcdef");
    }
}
