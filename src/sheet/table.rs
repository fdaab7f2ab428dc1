use crate::record::Record;
use log::debug;

/// A sheet read as rows of strings; row 0 holds the headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn headers(&self) -> &[String] {
        self.rows.first().map(|r| r.as_slice()).unwrap_or(&[])
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the first data row whose `id_column` cell matches `target_id`.
    ///
    /// Both sides are trimmed before an exact comparison. When identifiers
    /// repeat, the first occurrence in sheet order wins. A table with no data
    /// rows never matches.
    ///
    /// The matched row is returned keyed by trimmed header; columns with a
    /// blank header are left out and missing cells read as "".
    pub fn find_row(&self, id_column: usize, target_id: &str) -> Option<Record> {
        if self.rows.len() < 2 {
            debug!("Sheet has {} rows, nothing to search", self.rows.len());
            return None;
        }

        let target = target_id.trim();
        let headers = &self.rows[0];

        let (row_number, row) = self.rows.iter().enumerate().skip(1).find(|(_, row)| {
            row.get(id_column).map(|c| c.trim()).unwrap_or("") == target
        })?;

        debug!("Identifier matched sheet row {}", row_number + 1);

        let mut record = Record::new();
        for (index, header) in headers.iter().enumerate() {
            let header = header.trim();
            if header.is_empty() {
                continue;
            }
            let value = row.get(index).cloned().unwrap_or_default();
            record.insert(header, value);
        }
        Some(record)
    }
}

impl From<Vec<Vec<String>>> for SheetTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}
