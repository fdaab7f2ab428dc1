use super::target::{FieldEvent, FormTarget};
use crate::record::Record;
use log::{debug, trace};
use std::collections::HashMap;

/// Default canonical key → form control id table for the membership form
const DEFAULT_TARGETS: &[(&str, &str)] = &[
    ("id", "input_57"),
    ("lastName", "input_7"),
    ("firstName", "input_8"),
    ("birthYear", "input_9"),
    ("fatherName", "input_13"),
    ("street", "input_15"),
    ("houseNumber", "input_59"),
    ("city", "input_16"),
    ("phone", "input_18_full"),
    ("email", "input_21"),
    ("partnerId", "input_60"),
    ("partnerLastName", "input_24"),
    ("partnerFirstName", "input_25"),
    ("partnerBirthYear", "input_26"),
    ("partnerFatherName", "input_30"),
    ("partnerPhone", "input_33_full"),
    ("partnerEmail", "input_36"),
    ("creditCard", "input_40"),
    ("creditExpiry", "input_61"),
    ("cardHolderName", "input_42"),
    ("cardHolderId", "input_62"),
];

/// Canonical field key → form target id
pub type FieldTargets = HashMap<String, String>;

pub fn default_field_targets() -> FieldTargets {
    DEFAULT_TARGETS
        .iter()
        .map(|(k, t)| (k.to_string(), t.to_string()))
        .collect()
}

/// Writes canonical records into a [`FormTarget`]
#[derive(Debug, Clone)]
pub struct FormFiller {
    targets: FieldTargets,
}

impl Default for FormFiller {
    fn default() -> Self {
        Self::new(default_field_targets())
    }
}

impl FormFiller {
    pub fn new(targets: FieldTargets) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &FieldTargets {
        &self.targets
    }

    /// Default targets with `overrides` laid on top
    pub fn resolve_targets(&self, overrides: &FieldTargets) -> FieldTargets {
        let mut targets = self.targets.clone();
        targets.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        targets
    }

    /// Fill every mapped, non-empty field that the form has.
    ///
    /// Returns how many targets were set.
    pub fn fill(
        &self,
        record: &Record,
        overrides: &FieldTargets,
        form: &mut dyn FormTarget,
    ) -> usize {
        let targets = self.resolve_targets(overrides);
        let mut filled = 0;

        for (key, value) in record.iter() {
            let Some(target_id) = targets.get(key) else {
                trace!("No target for field '{}'", key);
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if !form.has_target(target_id) {
                debug!("Form has no target '{}' for field '{}'", target_id, key);
                continue;
            }

            form.set_value(target_id, value);
            form.notify(target_id, FieldEvent::Input);
            form.notify(target_id, FieldEvent::Change);
            filled += 1;
        }

        debug!("Filled {} of {} fields", filled, record.len());
        filled
    }
}
