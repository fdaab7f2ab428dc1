use anyhow::{Context, Result};
use dialoguer::{Input, Password, Select};
use sheet_autofill::ColumnRef;
use sheet_autofill::config::StoreConfig;
use sheet_autofill::store::constants::{DEFAULT_SHEET_NAME, SHEETS_API_BASE};
use std::path::PathBuf;

/// Interactive confirmation prompt using arrow-key navigable selection
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

fn prompt_id_column() -> Result<ColumnRef> {
    let label = Input::<String>::new()
        .with_prompt("Column holding the ID number")
        .default("A".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            input
                .parse::<ColumnRef>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    label.parse().context("Invalid column label")
}

/// Walk the user through choosing and configuring a record store
pub fn prompt_store() -> Result<StoreConfig> {
    let kinds = vec![
        "Relay web app (Apps Script deployment)",
        "Spreadsheet values API (API key)",
        "Local workbook file (.xlsx / .csv)",
    ];
    let kind = Select::new()
        .with_prompt("Where should records be read from?")
        .items(&kinds)
        .default(0)
        .interact()?;

    let store = match kind {
        0 => StoreConfig::Relay {
            url: Input::<String>::new()
                .with_prompt("Relay URL")
                .interact_text()?,
        },
        1 => StoreConfig::SheetsApi {
            api_key: Password::new().with_prompt("API key").interact()?,
            spreadsheet_id: Input::<String>::new()
                .with_prompt("Spreadsheet ID")
                .interact_text()?,
            sheet_name: Input::<String>::new()
                .with_prompt("Sheet name")
                .default(DEFAULT_SHEET_NAME.to_string())
                .interact_text()?,
            id_column: prompt_id_column()?,
            api_base: SHEETS_API_BASE.to_string(),
        },
        _ => {
            let path: String = Input::new().with_prompt("Workbook path").interact_text()?;
            let sheet_name: String = Input::new()
                .with_prompt("Sheet name (empty for the first sheet)")
                .allow_empty(true)
                .interact_text()?;
            StoreConfig::Workbook {
                path: PathBuf::from(path),
                sheet_name: Some(sheet_name.trim().to_string()).filter(|s| !s.is_empty()),
                id_column: prompt_id_column()?,
            }
        }
    };

    Ok(store)
}
