//! Spreadsheet column labels ("A", "AB", ...) and their zero-based offsets

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnLabelError {
    #[error("empty column label")]
    Empty,
    #[error("invalid character '{0}' in column label")]
    InvalidCharacter(char),
    #[error("column label '{0}' is out of range")]
    Overflow(String),
}

/// Convert a column label to a zero-based index.
///
/// The label is read as a base-26 numeral with A=1..Z=26. Lowercase letters
/// are accepted and treated as uppercase; anything else is rejected.
pub fn column_to_index(label: &str) -> Result<usize, ColumnLabelError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(ColumnLabelError::Empty);
    }

    let mut index: usize = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(ColumnLabelError::InvalidCharacter(c));
        }
        let value = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(value))
            .ok_or_else(|| ColumnLabelError::Overflow(label.to_string()))?;
    }

    Ok(index - 1)
}

/// Inverse of [`column_to_index`]
pub fn index_to_column(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

/// A validated column label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef(usize);

impl ColumnRef {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn label(&self) -> String {
        index_to_column(self.0)
    }
}

impl Default for ColumnRef {
    fn default() -> Self {
        Self(0)
    }
}

impl FromStr for ColumnRef {
    type Err = ColumnLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        column_to_index(s).map(ColumnRef)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for ColumnRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for ColumnRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
