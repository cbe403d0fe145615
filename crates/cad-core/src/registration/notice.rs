use serde::Serialize;

/// The single user-facing notice surfaced by a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Submission blocked by validation; one aggregate notice, never per field.
    ReviewRequired,
    /// The store accepted the registrant.
    Registered,
    /// The store call failed; remote error categories are not distinguished.
    SubmissionFailed,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::ReviewRequired => "Ops",
            Notice::Registered => "Sucesso!",
            Notice::SubmissionFailed => "Erro",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::ReviewRequired => "Revise os campos obrigatórios.",
            Notice::Registered => "Membro cadastrado com sucesso!",
            Notice::SubmissionFailed => "Não foi possível cadastrar.",
        }
    }
}
