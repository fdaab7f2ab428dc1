pub mod config;
pub mod fill;
pub mod lookup;

pub use config::{ConfigCommands, ConfigSubcommands};
pub use fill::FillArgs;
pub use lookup::{LookupArgs, OutputFormat};
