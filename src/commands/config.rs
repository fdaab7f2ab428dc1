use crate::cli::commands::{ConfigCommands, ConfigSubcommands};
use crate::cli::ui::prompts::{prompt_confirmation, prompt_store};
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use sheet_autofill::ColumnRef;
use sheet_autofill::config::{Config, StoreConfig};
use sheet_autofill::store::constants::SHEETS_API_BASE;

fn parse_column(label: &str) -> Result<ColumnRef> {
    label
        .parse()
        .with_context(|| format!("Invalid column label '{}'", label))
}

pub async fn config_command(mut config: Config, commands: ConfigCommands) -> Result<()> {
    match commands.command {
        ConfigSubcommands::Show => show(&config),
        ConfigSubcommands::Path => {
            match config.path() {
                Some(path) => println!("{}", path.display()),
                None => println!("{}", Config::default_path()?.display()),
            }
            Ok(())
        }
        ConfigSubcommands::Init => {
            if let Some(store) = &config.store {
                let replace = prompt_confirmation(
                    &format!("A {} store is already configured. Replace it?", store.kind()),
                    false,
                )?;
                if !replace {
                    info!("Config init cancelled");
                    return Ok(());
                }
            }
            let store = prompt_store()?;
            config.set_store(store)?;
            println!("{}", "Store configured".green());
            Ok(())
        }
        ConfigSubcommands::SetRelay { url } => {
            config.set_store(StoreConfig::Relay { url })?;
            println!("{}", "Relay store configured".green());
            Ok(())
        }
        ConfigSubcommands::SetApi {
            api_key,
            spreadsheet_id,
            sheet_name,
            id_column,
            api_base,
        } => {
            config.set_store(StoreConfig::SheetsApi {
                api_key,
                spreadsheet_id,
                sheet_name,
                id_column: parse_column(&id_column)?,
                api_base: api_base.unwrap_or_else(|| SHEETS_API_BASE.to_string()),
            })?;
            println!("{}", "Spreadsheet API store configured".green());
            Ok(())
        }
        ConfigSubcommands::SetWorkbook {
            path,
            sheet_name,
            id_column,
        } => {
            if !path.exists() {
                anyhow::bail!("Workbook file not found: {}", path.display());
            }
            config.set_store(StoreConfig::Workbook {
                path,
                sheet_name,
                id_column: parse_column(&id_column)?,
            })?;
            println!("{}", "Workbook store configured".green());
            Ok(())
        }
        ConfigSubcommands::SetTimeout { secs } => {
            config.set_timeout(secs)?;
            println!("Timeout set to {}s", secs);
            Ok(())
        }
        ConfigSubcommands::MapHeader { header, key } => config.map_header(header, key),
        ConfigSubcommands::UnmapHeader { header } => config.unmap_header(&header),
        ConfigSubcommands::MapField { key, target } => config.map_field(key, target),
        ConfigSubcommands::UnmapField { key } => config.unmap_field(&key),
    }
}

fn show(config: &Config) -> Result<()> {
    if config.store_from_env() {
        println!("{}", "Store (from environment, not saved):".bold());
    } else {
        println!("{}", "Store:".bold());
    }
    match config.active_store() {
        None => println!("  (none configured)"),
        Some(StoreConfig::Relay { url }) => {
            println!("  kind: relay");
            println!("  url:  {}", url);
        }
        Some(StoreConfig::SheetsApi {
            spreadsheet_id,
            sheet_name,
            id_column,
            api_base,
            ..
        }) => {
            println!("  kind:           sheets-api");
            println!("  spreadsheet_id: {}", spreadsheet_id);
            println!("  sheet_name:     {}", sheet_name);
            println!("  id_column:      {}", id_column);
            println!("  api_base:       {}", api_base);
            println!("  api_key:        ***");
        }
        Some(StoreConfig::Workbook {
            path,
            sheet_name,
            id_column,
        }) => {
            println!("  kind:       workbook");
            println!("  path:       {}", path.display());
            println!("  sheet_name: {}", sheet_name.as_deref().unwrap_or("(first sheet)"));
            println!("  id_column:  {}", id_column);
        }
    }

    println!("\nTimeout: {}s", config.timeout_secs);

    println!("\n{}", "Header mappings (added):".bold());
    if config.headers.is_empty() {
        println!("  (none)");
    }
    let mut headers: Vec<_> = config.headers.iter().collect();
    headers.sort();
    for (header, key) in headers {
        println!("  {} → {}", header, key);
    }

    println!("\n{}", "Field targets (overrides):".bold());
    if config.fields.is_empty() {
        println!("  (none)");
    }
    let mut fields: Vec<_> = config.fields.iter().collect();
    fields.sort();
    for (key, target) in fields {
        println!("  {} → {}", key, target);
    }

    Ok(())
}
