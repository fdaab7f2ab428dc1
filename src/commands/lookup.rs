use crate::cli::commands::LookupArgs;
use crate::cli::ui::{CliObserver, print_pairs};
use anyhow::Result;
use log::info;
use sheet_autofill::LookupObserver;
use sheet_autofill::config::Config;

/// Print the record for an ID
///
/// # Returns
/// * `Ok(())` - Record printed
/// * `Err(anyhow::Error)` - Missing ID, no matching row, or store failure
pub async fn lookup_command(config: &Config, args: LookupArgs) -> Result<()> {
    info!("Lookup command for '{}' (raw: {})", args.id, args.raw);

    let loader = super::open_loader(config)?;
    let mut observer = CliObserver::default();

    observer.loading(true);
    let result = if args.raw {
        loader.load_raw(&args.id).await
    } else {
        loader.load(&args.id).await
    };
    observer.loading(false);

    let record = match result {
        Ok(record) => record,
        Err(err) => {
            observer.error(&err);
            return Err(super::Reported(err).into());
        }
    };

    print_pairs(record.iter(), &record, args.format)
}
