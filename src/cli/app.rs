use super::commands::config::ConfigCommands;
use super::commands::fill::FillArgs;
use super::commands::lookup::LookupArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheet-autofill")]
#[command(about = "Look up a person by ID in a spreadsheet and fill form fields from the row")]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the record stored for an ID
    Lookup(LookupArgs),
    /// Load the record for an ID and show which form targets it fills
    Fill(FillArgs),
    /// List the sheet's headers and the field keys they map to
    Headers,
    /// Configuration management
    Config(ConfigCommands),
}
