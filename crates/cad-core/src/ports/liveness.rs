use async_trait::async_trait;
use thiserror::Error;

use crate::liveness::LivenessSessionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LivenessError {
    /// No response at all: DNS, refused connection, CORS preflight or timeout.
    #[error("liveness provider unreachable: {0}")]
    Network(String),

    #[error("liveness session request failed ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("liveness provider did not return a session id")]
    MissingSessionId,
}

/// Session-token handshake with the hosted liveness check.
#[async_trait]
pub trait LivenessSessionPort: Send + Sync {
    async fn create_session(&self) -> Result<LivenessSessionId, LivenessError>;
}
