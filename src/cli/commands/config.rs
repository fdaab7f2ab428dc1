use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the current configuration
    Show,
    /// Print the config file path
    Path,
    /// Interactively choose and configure a record store
    Init,
    /// Read rows through a relay web app
    SetRelay {
        /// Relay URL (the deployed web app address)
        url: String,
    },
    /// Read rows through the spreadsheet values API
    SetApi {
        /// API key
        #[arg(long)]
        api_key: String,
        /// Spreadsheet ID (from the sheet's URL)
        #[arg(long)]
        spreadsheet_id: String,
        /// Sheet (tab) name
        #[arg(long, default_value = "Sheet1")]
        sheet_name: String,
        /// Column holding the identifier
        #[arg(long, default_value = "A")]
        id_column: String,
        /// Override the API base URL
        #[arg(long)]
        api_base: Option<String>,
    },
    /// Read rows from a local .xlsx/.xls/.ods/.csv file
    SetWorkbook {
        /// Path to the workbook file
        path: PathBuf,
        /// Sheet name (first sheet when omitted)
        #[arg(long)]
        sheet_name: Option<String>,
        /// Column holding the identifier
        #[arg(long, default_value = "A")]
        id_column: String,
    },
    /// Set the lookup timeout in seconds
    SetTimeout {
        secs: u64,
    },
    /// Map a sheet header label to a field key
    MapHeader {
        /// Header label as it appears in the sheet
        header: String,
        /// Field key (e.g. "phone")
        key: String,
    },
    /// Remove a header mapping added with map-header
    UnmapHeader {
        header: String,
    },
    /// Send a field key to a specific form target
    MapField {
        /// Field key (e.g. "city")
        key: String,
        /// Form target id (e.g. "input_16")
        target: String,
    },
    /// Remove a field target added with map-field
    UnmapField {
        key: String,
    },
}
