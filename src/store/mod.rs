//! Record stores
//!
//! A store resolves an identifier to the raw row of a sheet. Which store is
//! used is decided once, from configuration.

pub mod constants;
pub mod http;
pub mod relay;
pub mod sheets_api;
pub mod workbook;

pub use relay::RelayStore;
pub use sheets_api::SheetsApiStore;
pub use workbook::WorkbookStore;

use crate::config::StoreConfig;
use crate::error::LookupResult;
use crate::record::Record;
use crate::sheet::SheetTable;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short name used in logs and messages
    fn name(&self) -> &str;

    /// Fetch the row for `id`, keyed by header label
    async fn fetch(&self, id: &str) -> LookupResult<Record>;

    /// The whole sheet, for stores that read one
    async fn table(&self) -> LookupResult<Option<SheetTable>> {
        Ok(None)
    }
}

/// Build the store a configuration names
pub fn from_config(config: &StoreConfig, timeout: Duration) -> LookupResult<Box<dyn RecordStore>> {
    let store: Box<dyn RecordStore> = match config {
        StoreConfig::Relay { url } => Box::new(RelayStore::new(url, http::build_client(timeout)?)),
        StoreConfig::SheetsApi {
            api_key,
            spreadsheet_id,
            sheet_name,
            id_column,
            api_base,
        } => Box::new(SheetsApiStore::new(
            api_base,
            spreadsheet_id,
            sheet_name,
            api_key,
            *id_column,
            http::build_client(timeout)?,
        )),
        StoreConfig::Workbook {
            path,
            sheet_name,
            id_column,
        } => Box::new(WorkbookStore::new(path, sheet_name.clone(), *id_column)),
    };
    debug!("Using {} store", store.name());
    Ok(store)
}
