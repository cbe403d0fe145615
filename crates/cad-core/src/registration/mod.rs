//! Registrant form engine.
//!
//! Leaves first: `validation` (pure rules) → `form_state` (store) →
//! `visibility` (what the UI may show). Submission orchestration lives in the
//! application layer and goes through `FormStateStore::begin_submit`.

mod birth_date;
mod error_map;
mod field;
pub mod form_state;
mod notice;
mod payload;
mod profile;
mod touched;
pub mod validation;
mod visibility;

pub use birth_date::BirthDate;
pub use error_map::ErrorMap;
pub use field::FieldId;
pub use form_state::{FormStateStore, SubmitGate};
pub use notice::Notice;
pub use payload::{PayloadError, RegistrationPayload};
pub use profile::RegistrantProfile;
pub use touched::TouchedFields;
pub use validation::{is_blank, ValidationEngine};
pub use visibility::ErrorVisibilityPolicy;
