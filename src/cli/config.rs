use anybase::{AlphabetRegistry, BaseSpec};

/// Resolves a `--from`/`--to` pair into a base.
///
/// Names are looked up in the layered registry, so user-defined alphabets
/// work. Raw digit strings are validated later by the conversion itself.
pub fn resolve_base(
    registry: &AlphabetRegistry,
    name: Option<&str>,
    digits: Option<&str>,
) -> Result<BaseSpec, Box<dyn std::error::Error>> {
    match (name, digits) {
        (Some(name), _) => Ok(BaseSpec::Alphabet(registry.alphabet(name)?)),
        (None, Some(digits)) => Ok(BaseSpec::digits(digits)),
        (None, None) => Err("an alphabet name or digit string is required".into()),
    }
}

/// Precision to apply: the flag wins, otherwise the configured default for
/// fractional input.
pub fn effective_precision(
    registry: &AlphabetRegistry,
    flag: Option<u32>,
    is_float: bool,
) -> Option<u32> {
    match flag {
        Some(precision) => Some(precision),
        None if is_float => Some(registry.settings.default_precision),
        None => None,
    }
}
