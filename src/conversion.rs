use crate::DEFAULT_PRECISION;
use crate::convert::fraction;
use crate::convert::integer;
use crate::core::alphabet::Alphabet;
use crate::core::config::AlphabetRegistry;
use crate::core::errors::{AlphabetError, Diagnostic, PrecisionWarning};
use crate::parse::{self, ParsedNumber};
use crate::result::{ConversionResult, Diagnostics};

/// How a conversion reacts to diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Record diagnostics and keep going
    #[default]
    Lenient,
    /// Record diagnostics and return the first one as `Err`
    Strict,
}

/// A base given by alphabet, by raw digit string, or by registry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseSpec {
    Alphabet(Alphabet),
    Digits(String),
    Named(String),
}

impl BaseSpec {
    pub fn named(name: impl Into<String>) -> Self {
        BaseSpec::Named(name.into())
    }

    pub fn digits(digits: impl Into<String>) -> Self {
        BaseSpec::Digits(digits.into())
    }

    /// Resolves to a validated alphabet, looking names up in the built-in
    /// registry.
    pub fn resolve(&self) -> Result<Alphabet, Diagnostic> {
        match self {
            BaseSpec::Named(name) => AlphabetRegistry::builtin()
                .map_err(|reason| AlphabetError::InvalidDefinition { reason })?
                .alphabet(name),
            BaseSpec::Alphabet(alphabet) => Ok(alphabet.clone()),
            BaseSpec::Digits(digits) => Ok(Alphabet::from_str(digits)?),
        }
    }

    /// Resolves against a caller-supplied registry.
    pub fn resolve_in(&self, registry: &AlphabetRegistry) -> Result<Alphabet, Diagnostic> {
        match self {
            BaseSpec::Named(name) => registry.alphabet(name),
            _ => self.resolve(),
        }
    }
}

impl From<Alphabet> for BaseSpec {
    fn from(alphabet: Alphabet) -> Self {
        BaseSpec::Alphabet(alphabet)
    }
}

impl From<&Alphabet> for BaseSpec {
    fn from(alphabet: &Alphabet) -> Self {
        BaseSpec::Alphabet(alphabet.clone())
    }
}

/// One input number bound to its source alphabet.
///
/// The input is parsed once on construction. Any number of outputs can then
/// be requested; each produces an independent [`ConversionResult`] and none
/// of them touches the input-stage diagnostics.
///
/// # Example
///
/// ```
/// use anybase::{BaseSpec, Conversion};
///
/// let conversion = Conversion::new("0.1", BaseSpec::named("decimal"));
/// let result = conversion.output(BaseSpec::named("binary"), false).unwrap();
/// assert_eq!(result.output, "0.000110011");
/// assert!(result.rounded);
/// ```
#[derive(Debug, Clone)]
pub struct Conversion {
    input: String,
    source: Option<Alphabet>,
    parsed: Option<ParsedNumber>,
    mode: Mode,
    precision: Option<u32>,
    diagnostics: Diagnostics,
}

impl Conversion {
    /// Lenient conversion; problems are recorded, never returned.
    pub fn new(input: &str, source: impl Into<BaseSpec>) -> Self {
        let mut conversion = Self::empty(input, Mode::Lenient);
        // Lenient raise never fails
        let _ = conversion.bind(source.into());
        conversion
    }

    /// Conversion in the given mode. In strict mode the first input-stage
    /// diagnostic is returned.
    pub fn with_mode(
        input: &str,
        source: impl Into<BaseSpec>,
        mode: Mode,
    ) -> Result<Self, Diagnostic> {
        let mut conversion = Self::empty(input, mode);
        conversion.bind(source.into())?;
        Ok(conversion)
    }

    pub fn strict(input: &str, source: impl Into<BaseSpec>) -> Result<Self, Diagnostic> {
        Self::with_mode(input, source, Mode::Strict)
    }

    /// Builds a conversion from UTF-8 bytes. Invalid sequences become
    /// U+FFFD, which then fails validation unless the alphabet contains it.
    pub fn from_bytes(
        input: &[u8],
        source: impl Into<BaseSpec>,
        mode: Mode,
    ) -> Result<Self, Diagnostic> {
        Self::with_mode(&String::from_utf8_lossy(input), source, mode)
    }

    fn empty(input: &str, mode: Mode) -> Self {
        Self {
            input: input.to_string(),
            source: None,
            parsed: None,
            mode,
            precision: None,
            diagnostics: Diagnostics::new(),
        }
    }

    fn bind(&mut self, source: BaseSpec) -> Result<(), Diagnostic> {
        let alphabet = match source.resolve() {
            Ok(alphabet) => alphabet,
            Err(diagnostic) => return raise(self.mode, &mut self.diagnostics, diagnostic),
        };

        match parse::parse(&self.input, &alphabet) {
            Ok(parsed) => {
                if parsed.is_float() && self.precision.is_none() {
                    self.precision = Some(DEFAULT_PRECISION);
                }
                self.parsed = Some(parsed);
            }
            Err(e) => raise(self.mode, &mut self.diagnostics, e.into())?,
        }
        self.source = Some(alphabet);
        Ok(())
    }

    /// Sets the number of destination digits after the point.
    ///
    /// Zero is rejected with a warning and the previous precision is kept.
    pub fn set_precision(&mut self, precision: u32) -> Result<(), Diagnostic> {
        if precision < 1 {
            tracing::warn!(requested = precision, "precision below minimum ignored");
            let warning = PrecisionWarning::BelowMinimum {
                requested: precision,
            };
            return raise(self.mode, &mut self.diagnostics, warning.into());
        }
        self.precision = Some(precision);
        Ok(())
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn source(&self) -> Option<&Alphabet> {
        self.source.as_ref()
    }

    pub fn parsed(&self) -> Option<&ParsedNumber> {
        self.parsed.as_ref()
    }

    /// Input-stage diagnostics (source alphabet, input format, precision).
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Converts the input into `dest`.
    ///
    /// Upper case is applied only when requested and the destination alphabet
    /// is case-foldable. When any error is present (input or output stage)
    /// the result carries no digits.
    pub fn output(
        &self,
        dest: impl Into<BaseSpec>,
        uppercase: bool,
    ) -> Result<ConversionResult, Diagnostic> {
        let mut result = ConversionResult {
            is_float: self.parsed.as_ref().is_some_and(|p| p.is_float()),
            separator: self.parsed.as_ref().and_then(|p| p.separator()),
            input_base: self.source.as_ref().map(|a| a.base()),
            input_digits: self.source.as_ref().map(|a| a.digits()),
            precision_requested: self.precision,
            diagnostics: self.diagnostics.clone(),
            ..Default::default()
        };

        let dest = match dest.into().resolve() {
            Ok(alphabet) => alphabet,
            Err(diagnostic) => {
                raise(self.mode, &mut result.diagnostics, diagnostic)?;
                return Ok(result.finish());
            }
        };
        result.output_base = Some(dest.base());
        result.output_digits = Some(dest.digits());
        result.uppercase_allowed = dest.is_case_foldable();

        let Some(parsed) = self.parsed.as_ref() else {
            return Ok(result.finish());
        };
        if result.errors_encountered() {
            return Ok(result.finish());
        }

        let source_base = parsed.alphabet().base();
        let mut value = integer::decode(parsed.integer_values(), source_base);

        if parsed.is_float() {
            let requested = self.precision.unwrap_or(DEFAULT_PRECISION);
            let fraction =
                fraction::convert_values(parsed.fractional_values(), source_base, &dest, requested);
            if let Some(warning) = fraction.warning.clone() {
                raise(self.mode, &mut result.diagnostics, warning.into())?;
            }
            if fraction.carry {
                value += 1u32;
            }
            result.after_point = fraction.digits;
            result.precision_used = Some(fraction.precision_used);
            result.max_precision = Some(fraction.max_precision);
            result.rounded = fraction.rounded;
        }

        result.before_point = integer::encode(&value, &dest);

        if uppercase && result.uppercase_allowed {
            result.before_point = result.before_point.to_uppercase();
            result.after_point = result.after_point.to_uppercase();
            result.uppercase_applied = true;
        }

        tracing::debug!(
            input = %self.input,
            from = source_base,
            to = dest.base(),
            rounded = result.rounded,
            "converted"
        );

        Ok(result.finish())
    }

    /// Converts the input into `dest` and returns only the text.
    pub fn output_string(
        &self,
        dest: impl Into<BaseSpec>,
        uppercase: bool,
    ) -> Result<String, Diagnostic> {
        Ok(self.output(dest, uppercase)?.output)
    }
}

fn raise(mode: Mode, sink: &mut Diagnostics, diagnostic: Diagnostic) -> Result<(), Diagnostic> {
    sink.record(diagnostic.clone());
    match mode {
        Mode::Lenient => Ok(()),
        Mode::Strict => Err(diagnostic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::FormatErrorKind;

    fn decimal() -> BaseSpec {
        BaseSpec::digits("0123456789")
    }

    fn binary() -> BaseSpec {
        BaseSpec::digits("01")
    }

    #[test]
    fn test_default_precision_for_floats_only() {
        assert_eq!(Conversion::new("12", decimal()).precision(), None);
        assert_eq!(
            Conversion::new("1.2", decimal()).precision(),
            Some(DEFAULT_PRECISION)
        );
    }

    #[test]
    fn test_set_precision_zero_keeps_previous() {
        let mut conversion = Conversion::new("0.1", decimal());
        conversion.set_precision(4).unwrap();
        conversion.set_precision(0).unwrap();
        assert_eq!(conversion.precision(), Some(4));
        assert!(conversion.diagnostics().warnings_encountered());
        assert!(!conversion.diagnostics().errors_encountered());
    }

    #[test]
    fn test_set_precision_zero_strict() {
        let mut conversion = Conversion::strict("0.1", decimal()).unwrap();
        let err = conversion.set_precision(0).unwrap_err();
        assert_eq!(
            err,
            Diagnostic::Precision(PrecisionWarning::BelowMinimum { requested: 0 })
        );
        assert_eq!(conversion.precision(), Some(DEFAULT_PRECISION));
    }

    #[test]
    fn test_invalid_source_alphabet_lenient() {
        let conversion = Conversion::new("1", BaseSpec::digits("aab"));
        assert!(conversion.source().is_none());
        assert!(matches!(
            conversion.diagnostics().errors()[0],
            Diagnostic::Alphabet(AlphabetError::DuplicateSymbol { symbol: 'a', .. })
        ));

        let result = conversion.output(binary(), false).unwrap();
        assert_eq!(result.output, "");
        assert_eq!(result.output_base, Some(2));
        assert!(result.errors_encountered());
    }

    #[test]
    fn test_invalid_input_strict() {
        let err = Conversion::strict("1.2.3", decimal()).unwrap_err();
        match err {
            Diagnostic::Format(e) => assert_eq!(e.kind, FormatErrorKind::ExtraSeparator),
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn test_output_alphabet_error_lenient() {
        let conversion = Conversion::new("5", decimal());
        let result = conversion.output(BaseSpec::digits("x"), false).unwrap();
        assert_eq!(result.output, "");
        assert_eq!(result.output_base, None);
        assert!(matches!(
            result.errors()[0],
            Diagnostic::Alphabet(AlphabetError::TooFewSymbols { len: 1 })
        ));
        // Input stage untouched
        assert!(!conversion.diagnostics().errors_encountered());
    }

    #[test]
    fn test_output_alphabet_error_strict() {
        let conversion = Conversion::strict("5", decimal()).unwrap();
        assert!(conversion.output(BaseSpec::digits("00"), false).is_err());
    }

    #[test]
    fn test_results_are_independent() {
        let conversion = Conversion::new("255", decimal());
        let hex = conversion.output(BaseSpec::digits("0123456789abcdef"), false).unwrap();
        let bad = conversion.output(BaseSpec::digits("z"), false).unwrap();
        let bin = conversion.output(binary(), false).unwrap();

        assert_eq!(hex.output, "ff");
        assert!(bad.errors_encountered());
        assert_eq!(bin.output, "11111111");
        assert!(!bin.errors_encountered());
    }

    #[test]
    fn test_clamp_warning_in_result() {
        let mut conversion = Conversion::new("0.1", decimal());
        conversion.set_precision(100_000).unwrap();
        let result = conversion.output(BaseSpec::digits("012"), false).unwrap();
        assert_eq!(result.precision_requested, Some(100_000));
        assert_eq!(result.max_precision, Some(3772));
        assert_eq!(result.precision_used, Some(3772));
        assert!(result.warnings_encountered());
        assert!(!result.output.is_empty());
        assert!(!conversion.diagnostics().warnings_encountered());
    }

    #[test]
    fn test_result_keeps_input_warnings_before_clamp() {
        let mut conversion = Conversion::new("0.1", decimal());
        conversion.set_precision(100_000).unwrap();
        conversion.set_precision(0).unwrap();
        let result = conversion.output(BaseSpec::digits("012"), false).unwrap();
        assert_eq!(
            result.warnings(),
            &[
                Diagnostic::Precision(PrecisionWarning::BelowMinimum { requested: 0 }),
                Diagnostic::Precision(PrecisionWarning::Clamped {
                    base: 3,
                    requested: 100_000,
                    max: 3772,
                }),
            ]
        );
        assert_eq!(conversion.diagnostics().warnings().len(), 1);
    }

    #[test]
    fn test_clamp_is_err_in_strict() {
        let mut conversion = Conversion::strict("0.1", decimal()).unwrap();
        conversion.set_precision(5000).unwrap();
        let err = conversion.output(decimal(), false).unwrap_err();
        assert!(matches!(
            err,
            Diagnostic::Precision(PrecisionWarning::Clamped { max: 1800, .. })
        ));
    }

    #[test]
    fn test_carry_into_integer() {
        let mut conversion = Conversion::new("0.99999", decimal());
        conversion.set_precision(2).unwrap();
        let result = conversion.output(decimal(), false).unwrap();
        assert_eq!(result.before_point, "1");
        assert_eq!(result.after_point, "0");
        assert_eq!(result.output, "1.0");
        assert!(result.rounded);
    }

    #[test]
    fn test_from_bytes() {
        let conversion = Conversion::from_bytes(b"101", binary(), Mode::Strict).unwrap();
        assert_eq!(conversion.output_string(decimal(), false).unwrap(), "5");

        let err = Conversion::from_bytes(&[0x31, 0xff], binary(), Mode::Strict).unwrap_err();
        assert!(matches!(err, Diagnostic::Format(_)));
    }
}
