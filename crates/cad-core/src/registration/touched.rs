use std::collections::BTreeSet;

use super::FieldId;

/// Fields the user has left at least once. Only grows until a reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields(BTreeSet<FieldId>);

impl TouchedFields {
    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn touch(&mut self, field: FieldId) {
        self.0.insert(field);
    }

    pub(crate) fn touch_all(&mut self) {
        self.0.extend(FieldId::ALL);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}
