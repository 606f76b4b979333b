//! Struct-like host records.

use std::collections::BTreeMap;

use super::HostArray;

/// A named-field host container.
///
/// Mirrors the host's struct values: fields are looked up by name, and a
/// field simply not being present is an ordinary, expected state that the
/// marshaling layer resolves against defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostRecord {
    fields: BTreeMap<String, HostArray>,
}

impl HostRecord {
    /// Empty record.
    pub fn new() -> Self {
        HostRecord::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: HostArray) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: HostArray) {
        self.fields.insert(name.into(), value);
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&HostArray> {
        self.fields.get(name)
    }

    /// Whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
