//! Layered configuration for the registrant API client.
//!
//! Precedence, lowest first: built-in defaults, the optional TOML file, then
//! `CADASTRO__`-prefixed environment variables (`CADASTRO__API__BASE_URL`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "CADASTRO";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiClientConfig {
    pub base_url: String,
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
    pub registrant_path: String,
    pub liveness_session_path: String,
}

impl ApiClientConfig {
    pub fn defaults() -> Self {
        Self {
            base_url: "http://127.0.0.1:1030".to_string(),
            timeout_ms: 20_000,
            registrant_path: "/pessoa".to_string(),
            liveness_session_path: "/liveness/criar-sessao".to_string(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// `base_url` joined with `path`, with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn registrant_url(&self) -> String {
        self.endpoint(&self.registrant_path)
    }

    pub fn liveness_session_url(&self) -> String {
        self.endpoint(&self.liveness_session_path)
    }
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MunicipalitiesConfig {
    /// JSON list of `{label, value}`; the built-in list is used when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CadastroConfig {
    pub api: ApiClientConfig,
    #[serde(default)]
    pub municipalities: MunicipalitiesConfig,
}

/// Load configuration from defaults, `path` (if given) and the process
/// environment. An explicit `path` must exist.
pub fn load_config(path: Option<&Path>) -> Result<CadastroConfig, ConfigError> {
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<CadastroConfig, ConfigError> {
    let defaults = ApiClientConfig::defaults();

    let mut builder = Config::builder()
        .set_default("api.base_url", defaults.base_url)?
        .set_default("api.timeout_ms", defaults.timeout_ms)?
        .set_default("api.registrant_path", defaults.registrant_path)?
        .set_default("api.liveness_session_path", defaults.liveness_session_path)?;

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    let config = builder
        .add_source(
            env.prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(config)
}
