//! Endpoints and defaults for the record stores

use std::time::Duration;

/// Public spreadsheet values API
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Sheet read when none is configured
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Query parameter carrying the identifier on relay requests
pub const RELAY_ID_PARAM: &str = "id";

/// Key of the failure payload a relay returns with HTTP 200
pub const RELAY_ERROR_KEY: &str = "error";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = concat!("sheet-autofill/", env!("CARGO_PKG_VERSION"));

/// Build the relay request URL for an identifier
pub fn relay_url(base_url: &str, id: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        base_url,
        separator,
        RELAY_ID_PARAM,
        urlencoding::encode(id)
    )
}

/// Build the values endpoint URL for a whole sheet
pub fn values_url(api_base: &str, spreadsheet_id: &str, sheet_name: &str, api_key: &str) -> String {
    format!(
        "{}/{}/values/{}?key={}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(spreadsheet_id),
        urlencoding::encode(sheet_name),
        urlencoding::encode(api_key)
    )
}
