//! Registrant enrollment application layer
//!
//! This crate contains the use cases that drive the form engine against its
//! collaborators: submission, municipality loading and liveness sessions.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{
    CreateLivenessSession, LoadMunicipalityCatalog, RegistrationSession, SubmitOutcome,
    SubmitRegistration,
};
