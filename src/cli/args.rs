use clap::{Parser, ValueEnum};

/// Move goods between a store and a shop with typed delivery requests
#[derive(Parser, Debug)]
#[command(name = "courier-inventory")]
#[command(about = "Move goods between a store and a shop with typed delivery requests", long_about = None)]
pub struct CliArgs {
    /// Command language used for requests and console messages
    #[arg(
        long = "lexicon",
        value_name = "LEXICON",
        default_value = "english",
        help = "Command language: 'english' (deliver/from/to) or 'russian' (доставить/из/в)"
    )]
    pub lexicon: LexiconType,

    /// How the inventory contents are printed before each prompt
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Stock report format: 'text' for item/quantity lines or 'csv'"
    )]
    pub format: ReportFormat,
}

/// Available command languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LexiconType {
    English,
    Russian,
}

/// Available stock report formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
}
