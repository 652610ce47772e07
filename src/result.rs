use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::errors::{Diagnostic, Severity};

/// Ordered errors and warnings for one stage of a conversion.
///
/// The first error of a stage clears any stale errors before it is stored;
/// every later error appends. Warnings behave the same way independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    errors_encountered: bool,
    warnings_encountered: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a diagnostic under its severity.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        let (list, encountered) = match diagnostic.severity() {
            Severity::Error => (&mut self.errors, &mut self.errors_encountered),
            Severity::Warning => (&mut self.warnings, &mut self.warnings_encountered),
        };
        if !*encountered {
            list.clear();
        }
        *encountered = true;
        list.push(diagnostic);
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn errors_encountered(&self) -> bool {
        self.errors_encountered
    }

    pub fn warnings_encountered(&self) -> bool {
        self.warnings_encountered
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

impl Serialize for Diagnostics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diagnostics", 4)?;
        state.serialize_field("errors_encountered", &self.errors_encountered)?;
        state.serialize_field("warnings_encountered", &self.warnings_encountered)?;
        state.serialize_field("errors", &self.error_messages())?;
        state.serialize_field("warnings", &self.warning_messages())?;
        state.end()
    }
}

/// Everything produced by one output request.
///
/// Created fresh per request and owned by the caller. When errors were
/// encountered, `output`, `before_point` and `after_point` are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ConversionResult {
    /// Destination symbols before the point
    pub before_point: String,
    /// Destination symbols after the point, empty for integers
    pub after_point: String,
    /// The whole converted number
    pub output: String,
    pub is_float: bool,
    /// Separator used in the input, repeated in the output
    pub separator: Option<char>,
    pub input_base: Option<usize>,
    pub output_base: Option<usize>,
    pub input_digits: Option<String>,
    pub output_digits: Option<String>,
    /// Precision asked for (explicitly or by default), if any
    pub precision_requested: Option<u32>,
    /// Precision actually used for the fractional digits
    pub precision_used: Option<u32>,
    /// Highest precision the destination base supports
    pub max_precision: Option<u32>,
    /// Whether the output differs from the exact input value
    pub rounded: bool,
    /// Whether the destination alphabet may be rendered in upper case
    pub uppercase_allowed: bool,
    pub uppercase_applied: bool,
    /// Input-stage diagnostics followed by those raised by this output request
    #[serde(flatten)]
    pub diagnostics: Diagnostics,
}

impl ConversionResult {
    /// True when no errors were encountered.
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.errors_encountered()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        self.diagnostics.errors()
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        self.diagnostics.warnings()
    }

    pub fn errors_encountered(&self) -> bool {
        self.diagnostics.errors_encountered()
    }

    pub fn warnings_encountered(&self) -> bool {
        self.diagnostics.warnings_encountered()
    }

    /// Assembles `output`, or clears all digits if an error was recorded.
    pub(crate) fn finish(mut self) -> Self {
        if self.errors_encountered() {
            self.before_point.clear();
            self.after_point.clear();
            self.output.clear();
            return self;
        }

        self.output = self.before_point.clone();
        if self.is_float
            && let Some(separator) = self.separator
        {
            self.output.push(separator);
            self.output.push_str(&self.after_point);
        }
        self
    }
}
