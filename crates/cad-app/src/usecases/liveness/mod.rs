mod create_session;

pub use create_session::CreateLivenessSession;
