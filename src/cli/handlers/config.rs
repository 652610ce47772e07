use crate::cli::{
    args::{ListArgs, ShowArgs},
    global::GlobalArgs,
};
use anybase::{AlphabetConfig, AlphabetRegistry};
use std::process::ExitCode;

/// Preview width when stdout is not a terminal
const DEFAULT_PREVIEW: usize = 20;

pub fn handle_list(
    args: ListArgs,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let names = config.names();

    if args.json {
        let entries: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                let entry = &config.alphabets[name];
                serde_json::json!({
                    "name": name,
                    "base": symbol_count(entry),
                    "case_foldable": entry.effective_case_foldable(),
                    "aliases": entry.aliases,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "alphabets": entries }))?
        );
        return Ok(ExitCode::SUCCESS);
    }

    let preview_len = preview_width();
    println!("Available alphabets:\n");
    for name in &names {
        let entry = &config.alphabets[name];
        let count = symbol_count(entry);
        let chars = entry.effective_chars().unwrap_or_default();
        let preview: String = chars.chars().take(preview_len).collect();
        let suffix = if count > preview_len { "..." } else { "" };
        println!("  {:<16} base-{:<4} {}{}", name, count, preview, suffix);
    }

    Ok(ExitCode::SUCCESS)
}

pub fn handle_show(
    args: ShowArgs,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Validates the entry and produces a suggestion for unknown names
    let alphabet = config.alphabet(&args.name)?;
    let entry = config
        .get_alphabet(&args.name)
        .ok_or_else(|| format!("alphabet '{}' not found", args.name))?;

    println!("Alphabet: {}", args.name);
    if !entry.chars.is_empty() {
        println!("  Type: Explicit character set");
    } else if let (Some(start), Some(length)) = (&entry.start, entry.length) {
        println!("  Type: Range-based");
        println!("  Start: {}", start);
        println!("  Length: {} characters", length);
    }
    println!("  Base: {}", alphabet.base());
    println!("  Digits: {}", alphabet.digits());
    println!(
        "  Case-foldable: {}",
        if alphabet.is_case_foldable() { "yes" } else { "no" }
    );
    if !entry.aliases.is_empty() {
        println!("  Aliases: {}", entry.aliases.join(", "));
    }

    Ok(ExitCode::SUCCESS)
}

fn symbol_count(entry: &AlphabetConfig) -> usize {
    entry
        .effective_chars()
        .map(|chars| chars.chars().count())
        .unwrap_or(0)
}

fn preview_width() -> usize {
    match terminal_size::terminal_size() {
        // Leave room for the name and base columns
        Some((terminal_size::Width(w), _)) => (w as usize).saturating_sub(32).clamp(8, 64),
        None => DEFAULT_PREVIEW,
    }
}
