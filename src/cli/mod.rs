mod args;
mod config;
mod global;
mod handlers;

use anybase::{AlphabetRegistry, Diagnostic};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use args::{ConvertArgs, ListArgs, ShowArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "anybase")]
#[command(version)]
#[command(about = "Convert numbers, fractions included, between arbitrary digit alphabets", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a number from one alphabet to another
    Convert(ConvertArgs),
    /// List available alphabets
    List(ListArgs),
    /// Show details for one alphabet
    Show(ShowArgs),
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match dispatch(cli.command, &cli.global) {
        Ok(code) => code,
        Err(e) => {
            report_error(e.as_ref(), cli.global.use_color());
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    command: Commands,
    global: &GlobalArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load alphabets with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    match command {
        Commands::Convert(args) => handlers::convert::handle(args, global, &config),
        Commands::List(args) => handlers::config::handle_list(args, global, &config),
        Commands::Show(args) => handlers::config::handle_show(args, global, &config),
    }
}

/// Installs a stderr log layer whose level follows `-v`.
fn init_tracing(global: &GlobalArgs) {
    let level = match (global.quiet, global.verbose) {
        (true, _) => LevelFilter::OFF,
        (false, 0) => LevelFilter::ERROR,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };

    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_ansi(global.use_color())
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(layer)
        .try_init();
}

fn report_error(error: &(dyn std::error::Error + 'static), color: bool) {
    eprintln!("{} {}", paint("error:", "31", color), error);

    if let Some(diagnostic) = error.downcast_ref::<Diagnostic>()
        && let Some(hint) = hint_for(diagnostic)
    {
        eprintln!("{} {}", paint("hint:", "36", color), hint);
    }
}

fn hint_for(diagnostic: &Diagnostic) -> Option<&'static str> {
    match diagnostic {
        Diagnostic::UnknownAlphabet(_) => Some("run 'anybase list' to see available alphabets"),
        Diagnostic::Alphabet(_) => Some("every symbol must be unique and at least 2 are needed"),
        Diagnostic::Precision(_) => Some("drop --strict to convert with the clamped precision"),
        Diagnostic::Format(_) => None,
    }
}

/// Wraps `text` in an ANSI SGR color when `color` is set.
pub(crate) fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
