//! Look up a person by ID in a spreadsheet and turn the matched row into
//! canonical form fields.

pub mod config;
pub mod error;
pub mod form;
pub mod loader;
pub mod mapping;
pub mod record;
pub mod sheet;
pub mod store;

pub use error::{ErrorKind, LookupError, LookupResult};
pub use form::{FieldTargets, FormFiller, FormTarget, MemoryForm};
pub use loader::{FillOutcome, LookupObserver, NoopObserver, RecordLoader};
pub use mapping::{FieldMapper, HeaderDictionary};
pub use record::Record;
pub use sheet::{ColumnRef, SheetTable, column_to_index};
pub use store::RecordStore;
