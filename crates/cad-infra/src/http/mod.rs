//! HTTP adapters for the registrant API.

mod client;
mod liveness;
mod registrant_repo;

pub use client::build_http_client;
pub use liveness::HttpLivenessSessionClient;
pub use registrant_repo::HttpRegistrantRepository;
