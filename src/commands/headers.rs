use crate::cli::ui::Spinner;
use anyhow::Result;
use colored::Colorize;
use sheet_autofill::config::Config;
use sheet_autofill::sheet::index_to_column;

/// List the sheet's headers with their column letters and field keys
pub async fn headers_command(config: &Config) -> Result<()> {
    let loader = super::open_loader(config)?;

    let table = {
        let _spinner = Spinner::start("Loading sheet...");
        loader.store().table().await?
    };

    let Some(table) = table else {
        anyhow::bail!(
            "The {} store returns single rows only; headers are not available",
            loader.store().name()
        );
    };

    println!("{}", "Headers:".bold());
    println!("========");
    for (index, header) in table.headers().iter().enumerate() {
        let header = header.trim();
        if header.is_empty() {
            println!("  {:>3}  {}", index_to_column(index), "(blank, skipped)".dimmed());
            continue;
        }
        let key = loader.mapper().canonical_key(header);
        println!("  {:>3}  {} → {}", index_to_column(index), header, key.cyan());
    }

    println!("\nData rows: {}", table.data_row_count());
    Ok(())
}
