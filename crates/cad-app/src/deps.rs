//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for wiring the use cases.
//! 用例装配所需的依赖分组。
//!
//! ## Prohibited / 禁止事项
//!
//! - No build steps, no defaults, no optional fields
//! - 无构建步骤、无默认值、无可选字段

use std::sync::Arc;

use cad_core::ports::{
    LivenessSessionPort, MunicipalitySourcePort, NoticePort, RegistrantPersistencePort,
};

use crate::usecases::{CreateLivenessSession, LoadMunicipalityCatalog, SubmitRegistration};

/// Every port the application needs, already constructed by the caller.
pub struct AppDeps {
    pub persistence: Arc<dyn RegistrantPersistencePort>,
    pub notices: Arc<dyn NoticePort>,
    pub municipalities: Arc<dyn MunicipalitySourcePort>,
    pub liveness: Arc<dyn LivenessSessionPort>,
}

impl AppDeps {
    pub fn submit_registration(&self) -> SubmitRegistration {
        SubmitRegistration::new(self.persistence.clone(), self.notices.clone())
    }

    pub fn load_municipality_catalog(&self) -> LoadMunicipalityCatalog {
        LoadMunicipalityCatalog::new(self.municipalities.clone())
    }

    pub fn create_liveness_session(&self) -> CreateLivenessSession {
        CreateLivenessSession::new(self.liveness.clone())
    }
}
