//! Business logic use cases
//! 业务用例
//!
//! Registration is the only flow that mutates form state; municipality
//! loading feeds the validation engine and liveness runs beside the form.
//! 只有注册流程会修改表单状态；市镇加载为校验引擎提供数据，活体检测与表单并行。

pub mod liveness;
pub mod municipality;
pub mod registration;

pub use liveness::CreateLivenessSession;
pub use municipality::LoadMunicipalityCatalog;
pub use registration::{RegistrationSession, SubmitError, SubmitOutcome, SubmitRegistration};
