//! # cad-core
//!
//! Core domain models and the form validation state engine for registrant
//! enrollment.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod liveness;
pub mod municipality;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use liveness::{LivenessBridgeMessage, LivenessSessionId};
pub use municipality::{MunicipalityCatalog, MunicipalityOption};
pub use registration::{
    ErrorMap, FieldId, FormStateStore, Notice, RegistrantProfile, RegistrationPayload, SubmitGate,
    ValidationEngine,
};
