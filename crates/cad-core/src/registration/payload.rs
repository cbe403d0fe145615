use std::fmt;

use serde::Serialize;

use super::{is_blank, BirthDate, RegistrantProfile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("birth date is not a calendar date in DD/MM/YYYY form: {0:?}")]
    InvalidBirthDate(String),
}

/// Body sent to the registrant store.
///
/// Same shape as [`RegistrantProfile`], with the birth date in canonical
/// `YYYY-MM-DD` form and optional fields omitted when absent.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "numero")]
    pub house_number: String,
    #[serde(rename = "complemento", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "municipioResidencia")]
    pub residence_municipality: String,
    #[serde(rename = "municipioCongregacao")]
    pub congregation_municipality: String,
    #[serde(rename = "atividadeProfissional")]
    pub professional_activity: String,
    #[serde(rename = "setorCongregacao")]
    pub congregation_sector: String,
    #[serde(rename = "cargoEclesiastico")]
    pub ecclesiastical_role: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "senhaConfirmacao")]
    pub password_confirmation: String,
    #[serde(rename = "linkFoto", skip_serializing_if = "Option::is_none")]
    pub photo_link: Option<String>,
}

impl RegistrationPayload {
    /// Transform a validated snapshot into the submission body.
    pub fn from_profile(profile: &RegistrantProfile) -> Result<Self, PayloadError> {
        let birth_date = BirthDate::parse_display(&profile.birth_date)
            .ok_or_else(|| PayloadError::InvalidBirthDate(profile.birth_date.clone()))?;

        Ok(Self {
            name: profile.name.clone(),
            birth_date: birth_date.to_canonical(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            neighborhood: profile.neighborhood.clone(),
            house_number: profile.house_number.clone(),
            complement: optional(&profile.complement),
            residence_municipality: profile.residence_municipality.clone(),
            congregation_municipality: profile.congregation_municipality.clone(),
            professional_activity: profile.professional_activity.clone(),
            congregation_sector: profile.congregation_sector.clone(),
            ecclesiastical_role: profile.ecclesiastical_role.clone(),
            // Shape was checked on the trimmed value.
            email: profile.email.trim().to_string(),
            password: profile.password.clone(),
            password_confirmation: profile.password_confirmation.clone(),
            photo_link: optional(&profile.photo_link),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    (!is_blank(value)).then(|| value.to_string())
}

// Passwords stay out of logs.
impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("name", &self.name)
            .field("birth_date", &self.birth_date)
            .field("email", &self.email)
            .field("residence_municipality", &self.residence_municipality)
            .field("congregation_municipality", &self.congregation_municipality)
            .field("photo_link", &self.photo_link)
            .finish_non_exhaustive()
    }
}
