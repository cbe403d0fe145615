use async_trait::async_trait;
use thiserror::Error;

use crate::municipality::MunicipalityOption;

#[derive(Debug, Error)]
pub enum MunicipalitySourceError {
    #[error("municipality source unavailable: {0}")]
    Unavailable(String),

    #[error("municipality data malformed: {0}")]
    Malformed(String),
}

/// Supplies the ordered `{label, value}` list used for municipality fields.
#[async_trait]
pub trait MunicipalitySourcePort: Send + Sync {
    async fn load(&self) -> Result<Vec<MunicipalityOption>, MunicipalitySourceError>;
}
