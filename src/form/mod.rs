//! Applying canonical records to form controls

pub mod filler;
pub mod target;

pub use filler::{FieldTargets, FormFiller, default_field_targets};
pub use target::{FieldEvent, FormTarget, MemoryForm};
