//! Registrant validation rules.
//!
//! Single rule path: per-field validation is a projection of whole-form
//! validation, so the two can never disagree.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BirthDate, ErrorMap, FieldId, RegistrantProfile};
use crate::municipality::MunicipalityCatalog;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

/// User-facing validation messages.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Informe seu nome.";
    pub const BIRTH_DATE_REQUIRED: &str = "Informe sua data de nascimento.";
    pub const BIRTH_DATE_INVALID: &str = "Data de nascimento inválida.";
    pub const PHONE_REQUIRED: &str = "Informe seu telefone.";
    pub const PHONE_TOO_SHORT: &str = "Telefone deve ter pelo menos 10 dígitos.";
    pub const ADDRESS_REQUIRED: &str = "Informe seu endereço.";
    pub const NEIGHBORHOOD_REQUIRED: &str = "Informe seu bairro.";
    pub const HOUSE_NUMBER_REQUIRED: &str = "Informe o número.";
    pub const HOUSE_NUMBER_INVALID: &str = "Número inválido.";
    pub const RESIDENCE_MUNICIPALITY_REQUIRED: &str = "Selecione o município de residência.";
    pub const CONGREGATION_MUNICIPALITY_REQUIRED: &str = "Selecione o município de congregação.";
    pub const MUNICIPALITY_UNKNOWN: &str = "Selecione um município da lista.";
    pub const PROFESSIONAL_ACTIVITY_REQUIRED: &str = "Informe sua atividade profissional.";
    pub const CONGREGATION_SECTOR_REQUIRED: &str = "Informe o setor da congregação.";
    pub const ECCLESIASTICAL_ROLE_REQUIRED: &str = "Informe seu cargo eclesiástico.";
    pub const EMAIL_REQUIRED: &str = "Informe seu e-mail.";
    pub const EMAIL_INVALID: &str = "E-mail inválido.";
    pub const PASSWORD_REQUIRED: &str = "Informe sua senha.";
    pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres.";
    pub const PASSWORD_CONFIRMATION_REQUIRED: &str = "Confirme sua senha.";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "As senhas não coincidem.";
}

/// Absent, empty and whitespace-only values all count as empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Pure, deterministic validation over a profile snapshot.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    municipalities: Arc<MunicipalityCatalog>,
}

impl ValidationEngine {
    pub fn new(municipalities: Arc<MunicipalityCatalog>) -> Self {
        Self { municipalities }
    }

    pub fn municipalities(&self) -> &MunicipalityCatalog {
        &self.municipalities
    }

    /// Apply every rule to every field; only violations are returned.
    pub fn validate_all(&self, profile: &RegistrantProfile) -> ErrorMap {
        let mut errors = ErrorMap::default();
        for field in FieldId::ALL {
            if let Some(message) = self.rule(profile, field) {
                errors.insert(field, message);
            }
        }
        errors
    }

    /// Message for `field`, defined as `validate_all(profile)[field]`.
    pub fn validate_field(&self, profile: &RegistrantProfile, field: FieldId) -> Option<String> {
        self.validate_all(profile).get(field).map(str::to_owned)
    }

    fn rule(&self, profile: &RegistrantProfile, field: FieldId) -> Option<&'static str> {
        use messages::*;

        let value = profile.value(field);
        match field {
            FieldId::Name => required(value, NAME_REQUIRED),
            FieldId::BirthDate => required(value, BIRTH_DATE_REQUIRED).or_else(|| {
                BirthDate::parse_display(value)
                    .is_none()
                    .then_some(BIRTH_DATE_INVALID)
            }),
            FieldId::Phone => required(value, PHONE_REQUIRED).or_else(|| {
                let digits = value.chars().filter(char::is_ascii_digit).count();
                (digits < MIN_PHONE_DIGITS).then_some(PHONE_TOO_SHORT)
            }),
            FieldId::Address => required(value, ADDRESS_REQUIRED),
            FieldId::Neighborhood => required(value, NEIGHBORHOOD_REQUIRED),
            FieldId::HouseNumber => required(value, HOUSE_NUMBER_REQUIRED).or_else(|| {
                let parsed = value.trim().parse::<f64>();
                (!matches!(parsed, Ok(n) if n.is_finite())).then_some(HOUSE_NUMBER_INVALID)
            }),
            FieldId::Complement | FieldId::PhotoLink => None,
            FieldId::ResidenceMunicipality => {
                required(value, RESIDENCE_MUNICIPALITY_REQUIRED)
                    .or_else(|| self.municipality(value))
            }
            FieldId::CongregationMunicipality => {
                required(value, CONGREGATION_MUNICIPALITY_REQUIRED)
                    .or_else(|| self.municipality(value))
            }
            FieldId::ProfessionalActivity => required(value, PROFESSIONAL_ACTIVITY_REQUIRED),
            FieldId::CongregationSector => required(value, CONGREGATION_SECTOR_REQUIRED),
            FieldId::EcclesiasticalRole => required(value, ECCLESIASTICAL_ROLE_REQUIRED),
            FieldId::Email => required(value, EMAIL_REQUIRED)
                .or_else(|| (!EMAIL_SHAPE.is_match(value.trim())).then_some(EMAIL_INVALID)),
            FieldId::Password => required(value, PASSWORD_REQUIRED).or_else(|| {
                (value.chars().count() < MIN_PASSWORD_LEN).then_some(PASSWORD_TOO_SHORT)
            }),
            FieldId::PasswordConfirmation => required(value, PASSWORD_CONFIRMATION_REQUIRED)
                .or_else(|| (value != profile.password).then_some(PASSWORDS_DO_NOT_MATCH)),
        }
    }

    fn municipality(&self, value: &str) -> Option<&'static str> {
        (!self.municipalities.contains(value)).then_some(messages::MUNICIPALITY_UNKNOWN)
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    is_blank(value).then_some(message)
}
