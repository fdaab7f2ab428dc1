use clap::{Args, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Args)]
pub struct LookupArgs {
    /// Identifier (national ID number) to look up
    pub id: String,
    /// Print the row with the sheet's own headers instead of field keys
    #[arg(long)]
    pub raw: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}
