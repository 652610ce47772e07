use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::alphabet::{Alphabet, detect_case_foldable};
use crate::core::errors::{
    AlphabetError, AlphabetNotFoundError, Diagnostic, find_closest_alphabet,
};

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlphabetConfig {
    /// The digit symbols in value order (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Starting character for range-based alphabet definition
    /// Use with `length` to define sequential Unicode ranges
    #[serde(default)]
    pub start: Option<String>,
    /// Number of characters in range-based alphabet
    #[serde(default)]
    pub length: Option<usize>,
    /// Whether the lower-case digits may also be read and written in upper
    /// case (auto-detected if not specified)
    #[serde(default)]
    pub case_foldable: Option<bool>,
    /// Alternative names accepted on lookup
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl AlphabetConfig {
    /// Returns the effective character set, generating from range if needed.
    ///
    /// Explicit `chars` take priority over `start` + `length`.
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        if let (Some(start_str), Some(length)) = (&self.start, self.length) {
            let start_char = start_str
                .chars()
                .next()
                .ok_or("start must contain at least one character")?;

            return Self::generate_range(start_char as u32, length);
        }

        Err("alphabet needs either chars or start + length".to_string())
    }

    /// Generate a string of sequential Unicode characters from a range.
    fn generate_range(start: u32, length: usize) -> Result<String, String> {
        const MAX_UNICODE: u32 = 0x10FFFF;
        const SURROGATE_START: u32 = 0xD800;
        const SURROGATE_END: u32 = 0xDFFF;

        if length == 0 {
            return Err("length must be greater than 0".to_string());
        }

        let end = u32::try_from(length - 1)
            .ok()
            .and_then(|offset| start.checked_add(offset))
            .ok_or("range exceeds maximum Unicode codepoint")?;

        if end > MAX_UNICODE {
            return Err(format!(
                "range end U+{:X} exceeds maximum Unicode codepoint U+{:X}",
                end, MAX_UNICODE
            ));
        }

        if start <= SURROGATE_END && end >= SURROGATE_START {
            return Err(format!(
                "range U+{:X}..U+{:X} crosses surrogate gap (U+D800..U+DFFF)",
                start, end
            ));
        }

        (start..=end)
            .map(|codepoint| {
                char::from_u32(codepoint).ok_or(format!("invalid codepoint U+{:X}", codepoint))
            })
            .collect()
    }

    /// Returns whether the alphabet is case-foldable, auto-detecting if not
    /// explicitly set.
    pub fn effective_case_foldable(&self) -> bool {
        if let Some(flag) = self.case_foldable {
            return flag;
        }
        match self.effective_chars() {
            Ok(chars) => detect_case_foldable(&chars.chars().collect::<Vec<_>>()),
            Err(_) => false,
        }
    }

    /// Builds the validated Alphabet this entry describes.
    pub fn build(&self) -> Result<Alphabet, AlphabetError> {
        let chars = self
            .effective_chars()
            .map_err(|reason| AlphabetError::InvalidDefinition { reason })?;
        Alphabet::builder()
            .chars(chars.chars())
            .case_foldable(self.effective_case_foldable())
            .build()
    }
}

/// Global settings for anybase.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Digits after the point for fractional output when none is requested
    #[serde(default = "default_precision")]
    pub default_precision: u32,
    /// Render case-foldable output in upper case by default
    #[serde(default)]
    pub uppercase: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_precision: default_precision(),
            uppercase: false,
        }
    }
}

fn default_precision() -> u32 {
    crate::DEFAULT_PRECISION
}

/// Named alphabets loaded from TOML files.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

static BUILTIN: OnceLock<Result<AlphabetRegistry, String>> = OnceLock::new();

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Shared, lazily parsed copy of the built-in table.
    pub fn builtin() -> Result<&'static AlphabetRegistry, String> {
        BUILTIN
            .get_or_init(|| Self::load_default().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| e.clone())
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/anybase/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("anybase").join("alphabets.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_config) => config.merge(user_config),
                    Err(e) => tracing::warn!(
                        path = %user_config_path.display(),
                        "failed to load user config: {}",
                        e
                    ),
                }
            }
        }

        let local_config_path = std::path::Path::new("alphabets.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_config) => config.merge(local_config),
                Err(e) => tracing::warn!(
                    path = %local_config_path.display(),
                    "failed to load local config: {}",
                    e
                ),
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in
    /// `self`. Settings are taken from `other`.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        self.settings = other.settings;
    }

    /// Retrieves an alphabet configuration by name or alias.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name).or_else(|| {
            self.alphabets
                .values()
                .find(|config| config.aliases.iter().any(|alias| alias == name))
        })
    }

    /// Sorted alphabet names (aliases excluded).
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds the named alphabet.
    ///
    /// An unknown name yields a not-found diagnostic with the closest known
    /// name as a suggestion; a broken entry yields its validation error.
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, Diagnostic> {
        let config = self.get_alphabet(name).ok_or_else(|| {
            let mut available = self.names();
            available.extend(
                self.alphabets
                    .values()
                    .flat_map(|config| config.aliases.iter().cloned()),
            );
            AlphabetNotFoundError::new(name, find_closest_alphabet(name, &available))
        })?;

        Ok(config.build()?)
    }
}
