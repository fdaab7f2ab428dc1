//! Spreadsheet values API store
//!
//! Downloads the whole sheet with `GET <base>/<id>/values/<sheet>?key=<key>`
//! and searches it locally.

use super::RecordStore;
use super::constants::values_url;
use super::http::{cell_to_string, get_json};
use crate::error::{LookupError, LookupResult};
use crate::record::Record;
use crate::sheet::{ColumnRef, SheetTable};
use async_trait::async_trait;
use log::info;
use serde_json::Value;

pub struct SheetsApiStore {
    api_base: String,
    spreadsheet_id: String,
    sheet_name: String,
    api_key: String,
    id_column: ColumnRef,
    http: reqwest::Client,
}

impl SheetsApiStore {
    pub fn new(
        api_base: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        sheet_name: impl Into<String>,
        api_key: impl Into<String>,
        id_column: ColumnRef,
        http: reqwest::Client,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: sheet_name.into(),
            api_key: api_key.into(),
            id_column,
            http,
        }
    }

    fn url(&self) -> String {
        values_url(
            &self.api_base,
            &self.spreadsheet_id,
            &self.sheet_name,
            &self.api_key,
        )
    }
}

#[async_trait]
impl RecordStore for SheetsApiStore {
    fn name(&self) -> &str {
        "sheets-api"
    }

    async fn fetch(&self, id: &str) -> LookupResult<Record> {
        let table = self.load_table().await?;
        table
            .find_row(self.id_column.index(), id)
            .ok_or_else(|| LookupError::not_found(id))
    }

    async fn table(&self) -> LookupResult<Option<SheetTable>> {
        self.load_table().await.map(Some)
    }
}

impl SheetsApiStore {
    async fn load_table(&self) -> LookupResult<SheetTable> {
        let body = get_json(&self.http, &self.url()).await?;
        let table = parse_values(body)?;
        info!(
            "Loaded sheet '{}' with {} data rows",
            self.sheet_name,
            table.data_row_count()
        );
        Ok(table)
    }
}

/// Read the `values` matrix of a values API response
pub fn parse_values(body: Value) -> LookupResult<SheetTable> {
    let rows = body
        .get("values")
        .and_then(|v| v.as_array())
        .filter(|rows| !rows.is_empty())
        .ok_or(LookupError::EmptySheet)?;

    let rows = rows
        .iter()
        .map(|row| {
            row.as_array()
                .map(|cells| cells.iter().map(cell_to_string).collect::<Vec<String>>())
                .unwrap_or_default()
        })
        .collect::<Vec<Vec<String>>>();

    Ok(SheetTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_values() {
        let body = json!({
            "range": "Sheet1!A1:C3",
            "values": [["ID", "Name"], ["42", "Alice", "extra"], [7]]
        });
        let table = parse_values(body).unwrap();
        assert_eq!(table.headers(), &["ID".to_string(), "Name".to_string()]);
        assert_eq!(table.data_row_count(), 2);
        assert_eq!(table.find_row(0, "7").unwrap().get("Name"), Some(""));
    }

    #[test]
    fn test_missing_or_empty_values() {
        assert!(matches!(parse_values(json!({})), Err(LookupError::EmptySheet)));
        assert!(matches!(
            parse_values(json!({"values": []})),
            Err(LookupError::EmptySheet)
        ));
    }
}
