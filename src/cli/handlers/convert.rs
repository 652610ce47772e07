use crate::cli::{
    args::ConvertArgs,
    config::{effective_precision, resolve_base},
    global::GlobalArgs,
    paint,
};
use anybase::{AlphabetRegistry, Conversion, Mode};
use std::process::ExitCode;

pub fn handle(
    args: ConvertArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let source = resolve_base(config, args.from.as_deref(), args.from_digits.as_deref())?;
    let dest = resolve_base(config, args.to.as_deref(), args.to_digits.as_deref())?;
    let mode = if args.strict {
        Mode::Strict
    } else {
        Mode::Lenient
    };

    let mut conversion = Conversion::with_mode(&args.number, source, mode)?;
    let is_float = conversion.parsed().is_some_and(|p| p.is_float());
    if let Some(precision) = effective_precision(config, args.precision, is_float) {
        conversion.set_precision(precision)?;
    }

    let uppercase = args.uppercase || config.settings.uppercase;
    let result = conversion.output(dest, uppercase)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_ok() {
        println!("{}", result.output);
    }

    let color = global.use_color();
    if !global.quiet {
        for warning in result.warnings() {
            eprintln!("{} {}", paint("warning:", "33", color), warning);
        }
    }
    for error in result.errors() {
        eprintln!("{} {}", paint("error:", "31", color), error);
    }

    if result.errors_encountered() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
