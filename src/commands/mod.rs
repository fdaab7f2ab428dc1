pub mod config;
pub mod fill;
pub mod headers;
pub mod lookup;

pub use config::config_command;
pub use fill::fill_command;
pub use headers::headers_command;
pub use lookup::lookup_command;

use anyhow::Result;
use sheet_autofill::config::Config;
use sheet_autofill::{FieldMapper, LookupError, RecordLoader, store};
use thiserror::Error;

/// A lookup failure that has already been shown to the user
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Reported(#[from] pub LookupError);

/// Build a loader from the configured store and header table
pub fn open_loader(config: &Config) -> Result<RecordLoader> {
    let store = store::from_config(config.require_store()?, config.timeout())?;
    let mapper = FieldMapper::new(config.header_dictionary());
    Ok(RecordLoader::new(store, mapper).with_timeout(config.timeout()))
}
