use serde::{Deserialize, Serialize};

use super::FieldId;

/// Data snapshot captured by the registration form.
///
/// All values are kept exactly as the inputs produced them (masked date and
/// phone included); semantic typing is enforced by validation only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrantProfile {
    #[serde(rename = "nome")]
    pub name: String,
    /// Display form `DD/MM/YYYY`.
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
    #[serde(rename = "complemento")]
    pub complement: String,
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
    /// Image reference produced by the capture collaborator.
    #[serde(rename = "linkFoto")]
    pub photo_link: String,
}

impl RegistrantProfile {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::BirthDate => &self.birth_date,
            FieldId::Phone => &self.phone,
            FieldId::Address => &self.address,
            FieldId::Neighborhood => &self.neighborhood,
            FieldId::HouseNumber => &self.house_number,
            FieldId::Complement => &self.complement,
            FieldId::ResidenceMunicipality => &self.residence_municipality,
            FieldId::CongregationMunicipality => &self.congregation_municipality,
            FieldId::ProfessionalActivity => &self.professional_activity,
            FieldId::CongregationSector => &self.congregation_sector,
            FieldId::EcclesiasticalRole => &self.ecclesiastical_role,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::PasswordConfirmation => &self.password_confirmation,
            FieldId::PhotoLink => &self.photo_link,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Copy of this snapshot with one field replaced.
    pub fn with(&self, field: FieldId, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::BirthDate => &mut self.birth_date,
            FieldId::Phone => &mut self.phone,
            FieldId::Address => &mut self.address,
            FieldId::Neighborhood => &mut self.neighborhood,
            FieldId::HouseNumber => &mut self.house_number,
            FieldId::Complement => &mut self.complement,
            FieldId::ResidenceMunicipality => &mut self.residence_municipality,
            FieldId::CongregationMunicipality => &mut self.congregation_municipality,
            FieldId::ProfessionalActivity => &mut self.professional_activity,
            FieldId::CongregationSector => &mut self.congregation_sector,
            FieldId::EcclesiasticalRole => &mut self.ecclesiastical_role,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::PasswordConfirmation => &mut self.password_confirmation,
            FieldId::PhotoLink => &mut self.photo_link,
        }
    }
}
