//! Form state store.
//!
//! Holds the profile snapshot together with the touched set, the error map and
//! the submit flags. All mutators are synchronous: when one returns, the error
//! map already reflects the mutation.
//!
//! Revalidation triggers:
//! - `set_field`: only if a submit was attempted or the field was touched, so a
//!   user still typing into a fresh field sees no premature errors.
//! - `touch_field`: always, against the stored value or a pending one.
//! - `begin_submit`: full recomputation.
//!
//! Password edits also refresh the confirmation, whose validity depends on it.

use super::{
    ErrorMap, ErrorVisibilityPolicy, FieldId, RegistrantProfile, TouchedFields, ValidationEngine,
};

/// Result of asking the store to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    /// A previous submission has not resolved yet; nothing changed.
    InFlight,
    /// Validation failed; every field is now touched and errors are current.
    Blocked(ErrorMap),
    /// Snapshot to submit; the store is now marked as submitting.
    Ready(RegistrantProfile),
}

/// Mutable state of one registration form.
#[derive(Debug, Clone)]
pub struct FormStateStore {
    engine: ValidationEngine,
    profile: RegistrantProfile,
    touched: TouchedFields,
    errors: ErrorMap,
    submitted: bool,
    submitting: bool,
}

impl FormStateStore {
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            engine,
            profile: RegistrantProfile::default(),
            touched: TouchedFields::default(),
            errors: ErrorMap::default(),
            submitted: false,
            submitting: false,
        }
    }

    pub fn profile(&self) -> &RegistrantProfile {
        &self.profile
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.profile.value(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Replace a field value, revalidating only when errors may already show.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.profile.set(field, value);

        if self.submitted || self.touched.contains(field) {
            let snapshot = self.profile.clone();
            self.revalidate(&snapshot, field);
        }
    }

    /// Mark a field as touched and validate it right away.
    ///
    /// `pending` covers a blur that races the value commit: the pending value
    /// is validated in place of the stored one, but it is not committed.
    pub fn touch_field(&mut self, field: FieldId, pending: Option<String>) {
        self.touched.touch(field);

        let snapshot = match pending {
            Some(value) => self.profile.with(field, value),
            None => self.profile.clone(),
        };
        self.revalidate(&snapshot, field);
    }

    /// Back to a fresh form.
    ///
    /// The submitting flag is left alone: an in-flight call still has to
    /// resolve through `finish_submit`.
    pub fn reset(&mut self) {
        self.profile = RegistrantProfile::default();
        self.touched.clear();
        self.errors.clear();
        self.submitted = false;
    }

    pub fn show_error(&self, field: FieldId) -> Option<&str> {
        self.visibility().show_error(field)
    }

    pub fn visible_errors(&self) -> Vec<(FieldId, &str)> {
        self.visibility().visible_errors()
    }

    /// Whether the submit button should be enabled.
    ///
    /// A UI hint only; `begin_submit` is the gate.
    pub fn can_submit(&self) -> bool {
        [
            FieldId::Name,
            FieldId::Email,
            FieldId::Password,
            FieldId::PasswordConfirmation,
        ]
        .into_iter()
        .all(|field| !self.profile.value(field).is_empty())
    }

    /// Recompute every error without touching fields. Returns `true` if valid.
    pub fn validate(&mut self) -> bool {
        self.errors = self.engine.validate_all(&self.profile);
        self.errors.is_empty()
    }

    /// Open a submit attempt.
    ///
    /// Marks the form submitted and every field touched, recomputes all
    /// errors, and either blocks or hands out the snapshot to submit. While a
    /// submission is in flight nothing changes and `InFlight` is returned.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.submitting {
            return SubmitGate::InFlight;
        }

        self.submitted = true;
        self.touched.touch_all();

        if !self.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                invalid_fields = self.errors.len(),
                "registration submit blocked by validation"
            );
            return SubmitGate::Blocked(self.errors.clone());
        }

        self.submitting = true;
        SubmitGate::Ready(self.profile.clone())
    }

    /// Close the submit attempt opened by a `Ready` gate.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    fn visibility(&self) -> ErrorVisibilityPolicy<'_> {
        ErrorVisibilityPolicy::new(self.submitted, &self.touched, &self.errors)
    }

    fn revalidate(&mut self, snapshot: &RegistrantProfile, field: FieldId) {
        let all = self.engine.validate_all(snapshot);
        self.errors.apply(field, all.get(field).map(str::to_owned));
        for dependent in field.dependents() {
            self.errors
                .apply(*dependent, all.get(*dependent).map(str::to_owned));
        }
    }
}
