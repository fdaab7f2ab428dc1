//! Header normalization into canonical field keys

pub mod dictionary;
pub mod fields;

pub use dictionary::HeaderDictionary;
pub use fields::FieldMapper;
