//! Port interfaces for the registration domain.
//!
//! Ports are the contract between the use cases and the collaborators the
//! form engine delegates to: the remote registrant store, the municipality
//! list, the liveness provider and the notice surface. Infrastructure
//! implements them; the core never performs I/O itself.

pub mod liveness;
pub mod municipality_source;
pub mod notice;
pub mod registrant_persistence;

pub use liveness::{LivenessError, LivenessSessionPort};
pub use municipality_source::{MunicipalitySourceError, MunicipalitySourcePort};
pub use notice::NoticePort;
pub use registrant_persistence::{PersistenceError, RegistrantPersistencePort};
