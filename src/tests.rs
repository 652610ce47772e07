use crate::{
    AlphabetError, BaseSpec, Conversion, Diagnostic, FormatErrorKind, Mode, PrecisionWarning,
    convert, convert_with_precision,
};

fn named(name: &str) -> BaseSpec {
    BaseSpec::named(name)
}

#[test]
fn test_binary_to_decimal() {
    assert_eq!(convert("1010", named("binary"), named("decimal")).unwrap(), "10");
}

#[test]
fn test_hex_to_decimal() {
    assert_eq!(convert("ff", named("hex"), named("decimal")).unwrap(), "255");
}

#[test]
fn test_upper_case_input_folds() {
    assert_eq!(convert("FF", named("hexadecimal"), named("decimal")).unwrap(), "255");
}

#[test]
fn test_uppercase_output() {
    let conversion = Conversion::new("255", named("decimal"));
    let result = conversion.output(named("hexadecimal"), true).unwrap();
    assert_eq!(result.output, "FF");
    assert!(result.uppercase_allowed);
    assert!(result.uppercase_applied);
}

#[test]
fn test_uppercase_ignored_for_mixed_case_alphabet() {
    let conversion = Conversion::new("255", named("decimal"));
    let result = conversion.output(named("base64"), true).unwrap();
    assert!(!result.uppercase_allowed);
    assert!(!result.uppercase_applied);
    assert_eq!(result.output, "D/");
}

#[test]
fn test_half_to_binary_exact() {
    let result = Conversion::new("0.5", named("decimal"))
        .output(named("binary"), false)
        .unwrap();
    assert_eq!(result.output, "0.1");
    assert!(!result.rounded);
    assert!(result.is_float);
    assert_eq!(result.precision_requested, Some(10));
}

#[test]
fn test_tenth_to_binary_rounded() {
    let result = Conversion::new("0.1", named("decimal"))
        .output(named("binary"), false)
        .unwrap();
    assert_eq!(result.output, "0.000110011");
    assert_eq!(result.before_point, "0");
    assert_eq!(result.after_point, "000110011");
    assert!(result.rounded);
}

#[test]
fn test_duplicate_symbol_alphabet() {
    let err = convert("1", BaseSpec::digits("aab"), named("decimal")).unwrap_err();
    assert_eq!(
        err,
        Diagnostic::Alphabet(AlphabetError::DuplicateSymbol {
            symbol: 'a',
            first: 0,
            second: 1
        })
    );
}

#[test]
fn test_carry_out_of_fraction() {
    assert_eq!(
        convert_with_precision("0.99999", named("decimal"), named("decimal"), 2).unwrap(),
        "1.0"
    );
    assert_eq!(
        convert_with_precision("9.999", named("decimal"), named("decimal"), 2).unwrap(),
        "10.0"
    );
}

#[test]
fn test_carry_in_binary() {
    // 0.111111 in binary rounds up at two digits
    let result = {
        let mut conversion = Conversion::new("0.111111", named("binary"));
        conversion.set_precision(2).unwrap();
        conversion.output(named("binary"), false).unwrap()
    };
    assert_eq!(result.output, "1.0");
    assert!(result.rounded);
}

#[test]
fn test_comma_separator_preserved() {
    let result = Conversion::new("12,5", named("decimal"))
        .output(named("binary"), false)
        .unwrap();
    assert_eq!(result.output, "1100,1");
    assert_eq!(result.separator, Some(','));
}

#[test]
fn test_zero_fraction_keeps_digit() {
    assert_eq!(convert("1.0", named("decimal"), named("binary")).unwrap(), "1.0");
}

#[test]
fn test_empty_integer_part_is_zero() {
    assert_eq!(convert("", named("decimal"), named("binary")).unwrap(), "0");
}

#[test]
fn test_separator_positions_rejected() {
    for input in [".5", "5.", "1.2.3", "1,2.3"] {
        let err = convert(input, named("decimal"), named("binary")).unwrap_err();
        assert!(matches!(err, Diagnostic::Format(_)), "{}", input);
    }
}

#[test]
fn test_lenient_invalid_input_collects_error() {
    let conversion = Conversion::new("12x4", named("decimal"));
    let result = conversion.output(named("binary"), false).unwrap();
    assert_eq!(result.output, "");
    assert!(result.errors_encountered());
    match &result.errors()[0] {
        Diagnostic::Format(e) => {
            assert_eq!(e.kind, FormatErrorKind::InvalidCharacter);
            assert_eq!(e.position, 2);
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }
}

#[test]
fn test_unknown_alphabet_suggests() {
    let err = convert("1", named("hexadecmal"), named("decimal")).unwrap_err();
    match err {
        Diagnostic::UnknownAlphabet(e) => {
            assert_eq!(e.suggestion.as_deref(), Some("hexadecimal"));
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }
}

#[test]
fn test_precision_clamped_lenient() {
    let mut conversion = Conversion::new("0.1", named("decimal"));
    conversion.set_precision(2000).unwrap();
    let result = conversion.output(named("decimal"), false).unwrap();
    assert_eq!(result.precision_used, Some(1800));
    assert_eq!(result.output, "0.1");
    assert!(!result.rounded);
    assert_eq!(
        result.warnings()[0],
        Diagnostic::Precision(PrecisionWarning::Clamped {
            base: 10,
            requested: 2000,
            max: 1800
        })
    );
}

#[test]
fn test_precision_clamped_strict() {
    let err =
        convert_with_precision("0.1", named("decimal"), named("decimal"), 2000).unwrap_err();
    assert!(matches!(err, Diagnostic::Precision(_)));
}

#[test]
fn test_large_integer() {
    let big = "340282366920938463463374607431768211456";
    let hex = convert(big, named("decimal"), named("hex")).unwrap();
    assert_eq!(hex, "100000000000000000000000000000000");
    assert_eq!(convert(&hex, named("hex"), named("decimal")).unwrap(), big);
}

#[test]
fn test_custom_symbol_alphabets() {
    let suits = BaseSpec::digits("♠♥♦♣");
    assert_eq!(convert("27", named("decimal"), suits.clone()).unwrap(), "♥♦♣");
    assert_eq!(convert("♥♦♣", suits, named("decimal")).unwrap(), "27");
}

#[test]
fn test_many_outputs_from_one_input() {
    let conversion = Conversion::with_mode("10.25", named("decimal"), Mode::Strict).unwrap();
    assert_eq!(conversion.output_string(named("binary"), false).unwrap(), "1010.01");
    assert_eq!(conversion.output_string(named("octal"), false).unwrap(), "12.2");
    assert_eq!(conversion.output_string(named("hex"), false).unwrap(), "a.4");
}
