//! Use case for opening a liveness check session
//! 创建活体检测会话的用例
//!
//! The session id is handed to the hosted face-liveness page; the form engine
//! itself never waits on it.
//! 会话 id 交给托管的人脸活体页面；表单引擎本身从不等待它。

use std::sync::Arc;

use cad_core::ports::{LivenessError, LivenessSessionPort};
use cad_core::LivenessSessionId;
use tracing::{info, info_span, warn, Instrument};

pub struct CreateLivenessSession {
    liveness: Arc<dyn LivenessSessionPort>,
}

impl CreateLivenessSession {
    pub fn new(liveness: Arc<dyn LivenessSessionPort>) -> Self {
        Self { liveness }
    }

    /// Errors keep their diagnosis (unreachable, HTTP status, missing id) so
    /// the caller can tell a CORS or network problem from a server refusal.
    pub async fn execute(&self) -> Result<LivenessSessionId, LivenessError> {
        let span = info_span!("usecase.create_liveness_session.execute");

        async {
            match self.liveness.create_session().await {
                Ok(session_id) => {
                    info!(session_id = %session_id, "Liveness session created");
                    Ok(session_id)
                }
                Err(err) => {
                    warn!(error = %err, "Liveness session creation failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
