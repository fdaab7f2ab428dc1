use super::lookup::OutputFormat;
use clap::Args;

#[derive(Args)]
pub struct FillArgs {
    /// Identifier (national ID number) to look up
    pub id: String,
    /// Send a field to a different form target (e.g. --field city=input_99)
    #[arg(long = "field", value_name = "KEY=TARGET", value_parser = parse_field_target)]
    pub fields: Vec<(String, String)>,
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

fn parse_field_target(s: &str) -> Result<(String, String), String> {
    let (key, target) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=TARGET, got '{}'", s))?;
    let (key, target) = (key.trim(), target.trim());
    if key.is_empty() || target.is_empty() {
        return Err(format!("expected KEY=TARGET, got '{}'", s));
    }
    Ok((key.to_string(), target.to_string()))
}
