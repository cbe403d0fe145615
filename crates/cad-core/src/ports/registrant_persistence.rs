use async_trait::async_trait;
use thiserror::Error;

use crate::registration::RegistrationPayload;

/// Typed failure of the remote registrant store.
///
/// The submission flow treats every variant the same way (one generic notice);
/// the distinction exists for logs and for callers outside the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("registrant store unreachable: {0}")]
    Network(String),

    #[error("registrant store timed out")]
    Timeout,

    #[error("registrant store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[async_trait]
pub trait RegistrantPersistencePort: Send + Sync {
    /// Persist one registrant. Called once per submit attempt, never retried.
    async fn save(&self, payload: &RegistrationPayload) -> Result<(), PersistenceError>;
}

#[cfg(test)]
mockall::mock! {
    pub RegistrantPersistence {}

    #[async_trait]
    impl RegistrantPersistencePort for RegistrantPersistence {
        async fn save(&self, payload: &RegistrationPayload) -> Result<(), PersistenceError>;
    }
}
