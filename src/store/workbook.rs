//! Local workbook store
//!
//! Reads the sheet straight from an exported file: `.csv` through the csv
//! reader, anything else (`.xlsx`, `.xls`, `.ods`) through calamine.

use super::RecordStore;
use crate::error::{LookupError, LookupResult};
use crate::record::Record;
use crate::sheet::{ColumnRef, SheetTable};
use async_trait::async_trait;
use calamine::{Reader, open_workbook_auto};
use log::{debug, info};
use std::path::{Path, PathBuf};

pub struct WorkbookStore {
    path: PathBuf,
    sheet_name: Option<String>,
    id_column: ColumnRef,
}

impl WorkbookStore {
    pub fn new(path: impl Into<PathBuf>, sheet_name: Option<String>, id_column: ColumnRef) -> Self {
        Self {
            path: path.into(),
            sheet_name,
            id_column,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_table(&self) -> LookupResult<SheetTable> {
        let path = self.path.clone();
        let sheet_name = self.sheet_name.clone();
        let table = tokio::task::spawn_blocking(move || read_table(&path, sheet_name.as_deref()))
            .await
            .map_err(|e| LookupError::Workbook(format!("reader task failed: {}", e)))??;

        if table.is_empty() {
            return Err(LookupError::EmptySheet);
        }
        info!(
            "Loaded {} with {} data rows",
            self.path.display(),
            table.data_row_count()
        );
        Ok(table)
    }
}

#[async_trait]
impl RecordStore for WorkbookStore {
    fn name(&self) -> &str {
        "workbook"
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

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Read one sheet of a workbook file into a table
pub fn read_table(path: &Path, sheet_name: Option<&str>) -> LookupResult<SheetTable> {
    if !path.exists() {
        return Err(LookupError::Config(format!(
            "workbook file not found: {}",
            path.display()
        )));
    }

    if is_csv(path) {
        read_csv(path)
    } else {
        read_spreadsheet(path, sheet_name)
    }
}

fn read_csv(path: &Path) -> LookupResult<SheetTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LookupError::Workbook(e.to_string()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LookupError::Workbook(e.to_string()))?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    debug!("Read {} CSV rows from {}", rows.len(), path.display());
    Ok(SheetTable::new(rows))
}

fn read_spreadsheet(path: &Path, sheet_name: Option<&str>) -> LookupResult<SheetTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LookupError::Workbook(e.to_string()))?;

    let sheets = workbook.sheet_names();
    let sheet = match sheet_name {
        Some(name) => sheets
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| {
                LookupError::Config(format!(
                    "sheet '{}' not found (available: {})",
                    name,
                    sheets.join(", ")
                ))
            })?,
        None => sheets
            .first()
            .cloned()
            .ok_or(LookupError::EmptySheet)?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| LookupError::Workbook(format!("error reading sheet '{}': {}", sheet, e)))?;

    // The range starts at the first used cell; re-anchor it at A1 so column
    // letters mean the same thing as in the remote stores
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    let row_offset = row_offset as usize;
    let col_offset = col_offset as usize;

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_offset];
    rows.extend(range.rows().map(|row| {
        std::iter::repeat_n(String::new(), col_offset)
            .chain(row.iter().map(|cell| cell.to_string()))
            .collect::<Vec<String>>()
    }));

    debug!(
        "Read {} rows from sheet '{}' (used range starts at row {}, column {})",
        rows.len(),
        sheet,
        row_offset + 1,
        col_offset + 1
    );
    Ok(SheetTable::new(rows))
}
