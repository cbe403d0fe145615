//! Session handshake with the hosted liveness check.
//!
//! A request that never gets a response (refused connection, DNS, blocked
//! preflight, timeout) is reported as `Network`, distinct from a server that
//! answered with an error status.

use async_trait::async_trait;
use cad_core::ports::{LivenessError, LivenessSessionPort};
use cad_core::LivenessSessionId;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::client::error_body;
use crate::config::ApiClientConfig;

#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    #[serde(rename = "sessionId", default)]
    session_id: Option<String>,
}

pub struct HttpLivenessSessionClient {
    client: Client,
    url: String,
}

impl HttpLivenessSessionClient {
    pub fn new(client: Client, config: &ApiClientConfig) -> Self {
        Self {
            client,
            url: config.liveness_session_url(),
        }
    }
}

#[async_trait]
impl LivenessSessionPort for HttpLivenessSessionClient {
    async fn create_session(&self) -> Result<LivenessSessionId, LivenessError> {
        debug!(method = "POST", url = %self.url, "Liveness session request");

        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| LivenessError::Network(e.to_string()))?;

        let status = response.status();
        debug!(url = %self.url, status = status.as_u16(), "Liveness session response");

        if !status.is_success() {
            return Err(LivenessError::Http {
                status: status.as_u16(),
                message: error_body(response).await,
            });
        }

        let body: CreateSessionResponse = response
            .json()
            .await
            .map_err(|_| LivenessError::MissingSessionId)?;

        match body.session_id {
            Some(id) if !id.trim().is_empty() => Ok(LivenessSessionId::new(id)),
            _ => Err(LivenessError::MissingSessionId),
        }
    }
}
