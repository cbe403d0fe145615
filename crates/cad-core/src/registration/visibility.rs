use super::{ErrorMap, FieldId, TouchedFields};

/// Decides whether a field's current error may be shown.
///
/// An error surfaces once the user had a chance to act on the field (blur) or
/// after a submit attempt; a fresh form never renders as broken.
#[derive(Debug, Clone, Copy)]
pub struct ErrorVisibilityPolicy<'a> {
    submitted: bool,
    touched: &'a TouchedFields,
    errors: &'a ErrorMap,
}

impl<'a> ErrorVisibilityPolicy<'a> {
    pub fn new(submitted: bool, touched: &'a TouchedFields, errors: &'a ErrorMap) -> Self {
        Self {
            submitted,
            touched,
            errors,
        }
    }

    pub fn is_eligible(&self, field: FieldId) -> bool {
        self.submitted || self.touched.contains(field)
    }

    pub fn show_error(&self, field: FieldId) -> Option<&'a str> {
        if self.is_eligible(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Every error that `show_error` would currently return, in field order.
    pub fn visible_errors(&self) -> Vec<(FieldId, &'a str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.is_eligible(**field))
            .map(|(field, message)| (*field, message.as_str()))
            .collect()
    }
}
