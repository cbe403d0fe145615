use std::collections::btree_map::{BTreeMap, Iter};

use serde::Serialize;

use super::FieldId;

/// Per-field validation messages.
///
/// Only the validation engine produces entries; the form store refreshes
/// single keys from engine output, never from ad hoc messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldId, String>);

impl ErrorMap {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> Iter<'_, FieldId, String> {
        self.0.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.keys().copied()
    }

    pub(crate) fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Store `message` for `field`, or drop the entry when there is none.
    pub(crate) fn apply(&mut self, field: FieldId, message: Option<String>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = (&'a FieldId, &'a String);
    type IntoIter = Iter<'a, FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
