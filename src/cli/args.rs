use clap::Args;

/// Arguments for converting a number
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Number to convert, e.g. "ff", "0.1" or "12,5"
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Source alphabet by name
    #[arg(
        short = 'f',
        long,
        value_name = "NAME",
        conflicts_with = "from_digits",
        required_unless_present = "from_digits"
    )]
    pub from: Option<String>,

    /// Source alphabet given as its digit symbols in value order
    #[arg(long, value_name = "DIGITS")]
    pub from_digits: Option<String>,

    /// Destination alphabet by name
    #[arg(
        short = 't',
        long,
        value_name = "NAME",
        conflicts_with = "to_digits",
        required_unless_present = "to_digits"
    )]
    pub to: Option<String>,

    /// Destination alphabet given as its digit symbols in value order
    #[arg(long, value_name = "DIGITS")]
    pub to_digits: Option<String>,

    /// Digits after the point for fractional input
    #[arg(short = 'p', long, value_name = "N")]
    pub precision: Option<u32>,

    /// Render the output in upper case when the alphabet allows it
    #[arg(short = 'u', long)]
    pub uppercase: bool,

    /// Fail on the first warning or error
    #[arg(long)]
    pub strict: bool,

    /// Print the full conversion result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for listing alphabets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for showing one alphabet
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Alphabet name or alias
    pub name: String,
}
