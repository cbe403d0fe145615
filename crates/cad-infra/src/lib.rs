//! Infrastructure adapters for registrant enrollment: the HTTP registrant
//! store and liveness client, municipality sources and configuration.

pub mod config;
pub mod http;
pub mod municipality;

pub use config::{load_config, ApiClientConfig, CadastroConfig};
pub use http::{build_http_client, HttpLivenessSessionClient, HttpRegistrantRepository};
pub use municipality::{BuiltinMunicipalitySource, JsonFileMunicipalitySource};
