//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

/// Format a number as a Roman numeral
#[derive(Parser, Debug)]
#[command(name = "romanize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number to format, between 1 and 3000 inclusive (read from stdin if omitted)
    #[arg(allow_negative_numbers = true)]
    pub number: Option<i32>,

    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
