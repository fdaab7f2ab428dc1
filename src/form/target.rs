//! Form surfaces that a canonical record can be written into

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Change notifications fired after a value is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldEvent {
    Input,
    Change,
}

/// A set of named controls addressed by target id
pub trait FormTarget {
    /// Whether a control with this id exists
    fn has_target(&self, target_id: &str) -> bool;

    fn set_value(&mut self, target_id: &str, value: &str);

    /// Tell listeners on the control that its value changed
    fn notify(&mut self, target_id: &str, event: FieldEvent);
}

/// In-memory form that records written values and fired events
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    known: Option<HashSet<String>>,
    values: BTreeMap<String, String>,
    events: Vec<(String, FieldEvent)>,
}

impl MemoryForm {
    /// A form that accepts any target id
    pub fn new() -> Self {
        Self::default()
    }

    /// A form that only has the given controls
    pub fn with_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: Some(targets.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn value(&self, target_id: &str) -> Option<&str> {
        self.values.get(target_id).map(|s| s.as_str())
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn events(&self) -> &[(String, FieldEvent)] {
        &self.events
    }
}

impl FormTarget for MemoryForm {
    fn has_target(&self, target_id: &str) -> bool {
        match &self.known {
            Some(known) => known.contains(target_id),
            None => true,
        }
    }

    fn set_value(&mut self, target_id: &str, value: &str) {
        self.values.insert(target_id.to_string(), value.to_string());
    }

    fn notify(&mut self, target_id: &str, event: FieldEvent) {
        self.events.push((target_id.to_string(), event));
    }
}
