//! Use case for submitting a registration form
//! 提交注册表单的用例
//!
//! ## Behavior / 行为
//!
//! - One attempt: gate, payload, at most one store call, at most one notice
//! - 一次尝试：闸门检查、构建载荷、最多一次存储调用、最多一次通知
//! - Remote failures never map back onto fields
//! - 远端失败不会映射回表单字段

use std::sync::Arc;

use cad_core::ports::{NoticePort, PersistenceError, RegistrantPersistencePort};
use cad_core::registration::{ErrorMap, Notice, PayloadError, RegistrationPayload, SubmitGate};
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use super::RegistrationSession;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// How a submit attempt resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Blocked { errors: ErrorMap },
    /// A previous attempt is still pending; this one was ignored.
    AlreadySubmitting,
    Submitted,
    Failed(SubmitError),
    /// The session was torn down before the store answered.
    Cancelled,
}

pub struct SubmitRegistration {
    persistence: Arc<dyn RegistrantPersistencePort>,
    notices: Arc<dyn NoticePort>,
}

impl SubmitRegistration {
    pub fn new(
        persistence: Arc<dyn RegistrantPersistencePort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            persistence,
            notices,
        }
    }

    /// Execute one submit attempt against `session`.
    ///
    /// # Behavior / 行为
    /// - In-flight attempt: `AlreadySubmitting`, no notice, no call.
    /// - Invalid form: one `ReviewRequired` notice, no call.
    /// - Otherwise exactly one `save`, raced against the session teardown.
    ///
    /// The in-flight guard is released on every path that opened it.
    pub async fn execute(&self, session: &RegistrationSession) -> SubmitOutcome {
        let span = info_span!("usecase.submit_registration.execute");

        async {
            let profile = match session.begin_submit() {
                SubmitGate::InFlight => {
                    info!("Submission already in flight, ignoring");
                    return SubmitOutcome::AlreadySubmitting;
                }
                SubmitGate::Blocked(errors) => {
                    info!(invalid_fields = errors.len(), "Submission blocked by validation");
                    self.notices.notify(Notice::ReviewRequired);
                    return SubmitOutcome::Blocked { errors };
                }
                SubmitGate::Ready(profile) => profile,
            };

            let payload = RegistrationPayload::from_profile(&profile);
            let outcome = self.persist(session, payload).await;
            session.finish_submit();

            match &outcome {
                SubmitOutcome::Submitted => {
                    info!("Registrant submitted successfully");
                    self.notices.notify(Notice::Registered);
                }
                SubmitOutcome::Failed(err) => {
                    warn!(error = %err, "Registrant submission failed");
                    self.notices.notify(Notice::SubmissionFailed);
                }
                SubmitOutcome::Cancelled => {
                    info!("Submission cancelled by session teardown");
                }
                SubmitOutcome::Blocked { .. } | SubmitOutcome::AlreadySubmitting => {}
            }

            outcome
        }
        .instrument(span)
        .await
    }

    async fn persist(
        &self,
        session: &RegistrationSession,
        payload: Result<RegistrationPayload, PayloadError>,
    ) -> SubmitOutcome {
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => return SubmitOutcome::Failed(err.into()),
        };

        if session.is_torn_down() {
            return SubmitOutcome::Cancelled;
        }

        tokio::select! {
            biased;
            _ = session.cancellation().cancelled() => SubmitOutcome::Cancelled,
            result = self.persistence.save(&payload) => match result {
                Ok(()) => SubmitOutcome::Submitted,
                Err(err) => SubmitOutcome::Failed(err.into()),
            },
        }
    }
}
