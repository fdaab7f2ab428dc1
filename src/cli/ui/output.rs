use crate::cli::commands::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Print key/value pairs as pretty JSON or as an aligned two-column table
pub fn print_pairs<'a, I, T>(pairs: I, json_value: &T, format: OutputFormat) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(json_value)?);
        }
        OutputFormat::Table => {
            let pairs: Vec<_> = pairs.into_iter().collect();
            let width = pairs.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
            for (key, value) in pairs {
                let pad = width - key.chars().count();
                println!("{}{}  {}", key, " ".repeat(pad), value);
            }
        }
    }
    Ok(())
}
