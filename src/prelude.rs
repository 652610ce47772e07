//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use anybase::prelude::*;
//!
//! let conversion = Conversion::new("1010", BaseSpec::named("binary"));
//! let result = conversion.output(BaseSpec::named("decimal"), false).unwrap();
//! assert_eq!(result.output, "10");
//! ```

pub use crate::{
    Alphabet,
    // Config
    AlphabetRegistry,
    BaseSpec,
    // Conversion
    Conversion,
    ConversionResult,
    DEFAULT_PRECISION,
    // Errors
    Diagnostic,
    Mode,
    Severity,
    // Convenience functions
    convert,
    convert_with_precision,
};
