//! Liveness verification handshake types.
//!
//! The form engine never creates or consumes a liveness session; surrounding
//! screens do, through [`crate::ports::LivenessSessionPort`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque session token issued by the liveness provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LivenessSessionId(String);

impl LivenessSessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LivenessSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Messages posted by the hosted liveness page over the WebView bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LivenessBridgeMessage {
    SessionCreated {
        #[serde(rename = "sessionId")]
        session_id: LivenessSessionId,
    },
    AnalysisComplete {
        #[serde(rename = "sessionId")]
        session_id: LivenessSessionId,
    },
}

impl LivenessBridgeMessage {
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn session_id(&self) -> &LivenessSessionId {
        match self {
            LivenessBridgeMessage::SessionCreated { session_id }
            | LivenessBridgeMessage::AnalysisComplete { session_id } => session_id,
        }
    }
}
