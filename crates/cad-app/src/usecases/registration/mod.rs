mod session;
mod submit;

pub use session::RegistrationSession;
pub use submit::{SubmitError, SubmitOutcome, SubmitRegistration};
