use crate::cli::commands::{FillArgs, OutputFormat};
use crate::cli::ui::{CliObserver, print_pairs};
use anyhow::Result;
use log::info;
use serde_json::json;
use sheet_autofill::config::Config;
use sheet_autofill::{FieldTargets, FormFiller, MemoryForm};

/// Load the record for an ID into an in-memory form and print what was set
pub async fn fill_command(config: &Config, args: FillArgs) -> Result<()> {
    info!("Fill command for '{}'", args.id);

    let loader = super::open_loader(config)?;
    let filler = FormFiller::default();

    // Config overrides first, then the ones given on the command line
    let mut overrides: FieldTargets = config.field_overrides();
    overrides.extend(args.fields);

    let mut form = MemoryForm::new();
    let mut observer = CliObserver::default();
    let outcome = loader
        .load_and_fill(&args.id, &filler, &overrides, &mut form, &mut observer)
        .await
        .map_err(super::Reported)?;

    match args.format {
        OutputFormat::Json => {
            let output = json!({
                "filled": outcome.filled,
                "targets": form.values(),
                "record": outcome.record,
            });
            print_pairs(std::iter::empty(), &output, args.format)
        }
        OutputFormat::Table => print_pairs(
            form.values().iter().map(|(k, v)| (k.as_str(), v.as_str())),
            form.values(),
            args.format,
        ),
    }
}
