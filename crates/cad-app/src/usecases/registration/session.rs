//! # Registration Session / 注册会话
//!
//! Shared handle to one registration flow.
//! 单个注册流程的共享句柄。
//!
//! ## Behavior / 行为
//!
//! - The store mutex is held only for one synchronous store call, never across an `.await`
//! - 存储互斥锁只在一次同步调用期间持有，绝不跨越 `.await`
//! - The cancellation token ties any in-flight submission to the lifetime of the flow
//! - 取消令牌把进行中的提交绑定到流程的生命周期

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cad_core::registration::{ErrorMap, FieldId, FormStateStore, RegistrantProfile, SubmitGate};
use cad_core::ValidationEngine;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct RegistrationSession {
    store: Arc<Mutex<FormStateStore>>,
    cancel: CancellationToken,
}

impl RegistrationSession {
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            store: Arc::new(Mutex::new(FormStateStore::new(engine))),
            cancel: CancellationToken::new(),
        }
    }

    pub fn set_field(&self, field: FieldId, value: impl Into<String>) {
        self.lock().set_field(field, value);
    }

    /// Blur handler. `pending` is the value still being committed, if any.
    pub fn touch_field(&self, field: FieldId, pending: Option<String>) {
        self.lock().touch_field(field, pending);
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn show_error(&self, field: FieldId) -> Option<String> {
        self.lock().show_error(field).map(str::to_owned)
    }

    pub fn visible_errors(&self) -> Vec<(FieldId, String)> {
        self.lock()
            .visible_errors()
            .into_iter()
            .map(|(field, message)| (field, message.to_owned()))
            .collect()
    }

    pub fn profile(&self) -> RegistrantProfile {
        self.lock().profile().clone()
    }

    pub fn errors(&self) -> ErrorMap {
        self.lock().errors().clone()
    }

    pub fn is_submitted(&self) -> bool {
        self.lock().is_submitted()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().is_submitting()
    }

    pub fn can_submit(&self) -> bool {
        self.lock().can_submit()
    }

    /// End of the flow: aborts the pending submission, if any.
    ///
    /// Once torn down, later submit attempts resolve as cancelled without
    /// reaching the registrant store.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub(crate) fn begin_submit(&self) -> SubmitGate {
        self.lock().begin_submit()
    }

    pub(crate) fn finish_submit(&self) {
        self.lock().finish_submit();
    }

    pub(crate) fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    // The store holds plain data, so a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, FormStateStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
