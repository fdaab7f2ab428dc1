//! Tabular sheet data: column labels and row lookup

pub mod column;
pub mod table;

pub use column::{ColumnLabelError, ColumnRef, column_to_index, index_to_column};
pub use table::SheetTable;
