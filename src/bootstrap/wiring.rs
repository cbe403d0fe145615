//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create the infra adapters and group them into `AppDeps`
//! - 创建 infra 层适配器并组装为 `AppDeps`
//!
//! ## Prohibited / 禁止事项
//!
//! - No configuration loading; it is already resolved in config.rs
//! - 不加载配置，配置已在 config.rs 中解析
//! - No business decisions; those live in the use cases
//! - 不做业务决策，业务决策属于用例

use std::sync::Arc;

use cad_app::AppDeps;
use cad_core::ports::{MunicipalitySourcePort, NoticePort};
use cad_infra::config::CadastroConfig;
use cad_infra::http::{build_http_client, HttpLivenessSessionClient, HttpRegistrantRepository};
use cad_infra::municipality::{BuiltinMunicipalitySource, JsonFileMunicipalitySource};
use tracing::debug;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build every port from `config`. Notices are supplied by the caller since
/// they depend on the surface (console, tests).
pub fn wire_dependencies(
    config: &CadastroConfig,
    notices: Arc<dyn NoticePort>,
) -> WiringResult<AppDeps> {
    let client = build_http_client(&config.api)?;

    let municipalities: Arc<dyn MunicipalitySourcePort> = match &config.municipalities.file {
        Some(path) => {
            debug!(path = %path.display(), "Using municipality file");
            Arc::new(JsonFileMunicipalitySource::new(path.clone()))
        }
        None => Arc::new(BuiltinMunicipalitySource::new()),
    };

    Ok(AppDeps {
        persistence: Arc::new(HttpRegistrantRepository::new(client.clone(), &config.api)),
        notices,
        municipalities,
        liveness: Arc::new(HttpLivenessSessionClient::new(client, &config.api)),
    })
}
