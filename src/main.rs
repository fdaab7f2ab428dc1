use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{error, info};
use sheet_autofill::LookupError;
use sheet_autofill::config::Config;

mod cli;
mod commands;

use cli::Cli;
use cli::app::Commands;
use commands::Reported;

fn init_logging() -> Result<()> {
    // Log to a file (truncated on each run) so stdout stays machine-readable
    let log_path = Config::config_dir()?.join("sheet-autofill.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Lookup(args) => commands::lookup_command(&config, args).await,
        Commands::Fill(args) => commands::fill_command(&config, args).await,
        Commands::Headers => commands::headers_command(&config).await,
        Commands::Config(cmd) => commands::config_command(config, cmd).await,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Warning: file logging disabled: {:#}", e);
    }

    let cli = Cli::parse();
    info!("Starting sheet-autofill");

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        if e.downcast_ref::<Reported>().is_none() {
            match e.downcast_ref::<LookupError>() {
                Some(lookup) => eprintln!("{}", lookup.user_message().red()),
                None => eprintln!("{} {:#}", "Error:".red(), e),
            }
        }
        std::process::exit(1);
    }
}
