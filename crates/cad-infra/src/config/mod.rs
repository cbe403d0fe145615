pub mod api_config;

pub use api_config::{
    load_config, ApiClientConfig, CadastroConfig, ConfigError, MunicipalitiesConfig,
};
