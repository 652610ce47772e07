use std::fmt;

/// Errors raised while validating an alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// A symbol occurs more than once
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },
    /// Fewer than two symbols, so no positional system exists
    TooFewSymbols { len: usize },
    /// A configured alphabet whose symbols cannot be produced
    InvalidDefinition { reason: String },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "alphabet repeats symbol '{}' at positions {} and {}; every symbol must be unique",
                symbol, first, second
            ),
            AlphabetError::TooFewSymbols { len } => {
                write!(f, "alphabet needs at least 2 symbols, got {}", len)
            }
            AlphabetError::InvalidDefinition { reason } => {
                write!(f, "invalid alphabet definition: {}", reason)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// What is wrong with an input number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Neither a digit of the source alphabet nor a decimal separator
    InvalidCharacter,
    /// A second decimal separator
    ExtraSeparator,
    /// A decimal separator as the first or last character
    SeparatorAtEdge,
}

/// The input number could not be parsed against its source alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub kind: FormatErrorKind,
    pub char: char,
    /// Character (not byte) position in the input
    pub position: usize,
    pub input: String,
}

impl FormatError {
    /// Create a FormatError, truncating long inputs for display.
    pub fn new(kind: FormatErrorKind, c: char, position: usize, input: &str) -> Self {
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        FormatError {
            kind,
            char: c,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormatErrorKind::InvalidCharacter => write!(
                f,
                "invalid character '{}' at position {} in '{}': not a digit of the source alphabet",
                self.char, self.position, self.input
            ),
            FormatErrorKind::ExtraSeparator => write!(
                f,
                "second decimal separator '{}' at position {} in '{}'",
                self.char, self.position, self.input
            ),
            FormatErrorKind::SeparatorAtEdge => write!(
                f,
                "decimal separator '{}' at position {} in '{}' cannot start or end a number",
                self.char, self.position, self.input
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// A requested output precision that cannot be honored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecisionWarning {
    /// Precision below 1 digit; the previous setting is kept
    BelowMinimum { requested: u32 },
    /// Precision above what the destination base can represent; clamped
    Clamped {
        base: usize,
        requested: u32,
        max: u32,
    },
}

impl fmt::Display for PrecisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionWarning::BelowMinimum { requested } => write!(
                f,
                "illegal float precision {}; precision must be at least 1",
                requested
            ),
            PrecisionWarning::Clamped {
                base,
                requested,
                max,
            } => write!(
                f,
                "float precision at base {} can be no greater than {} (requested {}); using {}",
                base, max, requested, max
            ),
        }
    }
}

impl std::error::Error for PrecisionWarning {}

/// Error when a named alphabet is not in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alphabet '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for AlphabetNotFoundError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Any problem recorded during a conversion.
///
/// Errors block the conversion they belong to; warnings do not. In strict
/// mode the first diagnostic an operation raises is also returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Alphabet(AlphabetError),
    UnknownAlphabet(AlphabetNotFoundError),
    Format(FormatError),
    Precision(PrecisionWarning),
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::Precision(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Alphabet(e) => e.fmt(f),
            Diagnostic::UnknownAlphabet(e) => e.fmt(f),
            Diagnostic::Format(e) => e.fmt(f),
            Diagnostic::Precision(w) => w.fmt(f),
        }
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Diagnostic::Alphabet(e) => Some(e),
            Diagnostic::UnknownAlphabet(e) => Some(e),
            Diagnostic::Format(e) => Some(e),
            Diagnostic::Precision(w) => Some(w),
        }
    }
}

impl From<AlphabetError> for Diagnostic {
    fn from(e: AlphabetError) -> Self {
        Diagnostic::Alphabet(e)
    }
}

impl From<AlphabetNotFoundError> for Diagnostic {
    fn from(e: AlphabetNotFoundError) -> Self {
        Diagnostic::UnknownAlphabet(e)
    }
}

impl From<FormatError> for Diagnostic {
    fn from(e: FormatError) -> Self {
        Diagnostic::Format(e)
    }
}

impl From<PrecisionWarning> for Diagnostic {
    fn from(w: PrecisionWarning) -> Self {
        Diagnostic::Precision(w)
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
