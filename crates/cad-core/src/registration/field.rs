use std::fmt;

use serde::{Serialize, Serializer};

/// Identifier of a registrant form field.
///
/// 表单字段标识（封闭集合）。
///
/// The set is closed on purpose: every lookup into touched/error state goes
/// through this enum, and every `match` over it is exhaustive, so a field
/// without a validation rule or a misspelled key does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    BirthDate,
    Phone,
    Address,
    Neighborhood,
    HouseNumber,
    Complement,
    ResidenceMunicipality,
    CongregationMunicipality,
    ProfessionalActivity,
    CongregationSector,
    EcclesiasticalRole,
    Email,
    Password,
    PasswordConfirmation,
    PhotoLink,
}

impl FieldId {
    /// Every field, in form display order.
    pub const ALL: [FieldId; 16] = [
        FieldId::Name,
        FieldId::BirthDate,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Neighborhood,
        FieldId::HouseNumber,
        FieldId::Complement,
        FieldId::ResidenceMunicipality,
        FieldId::CongregationMunicipality,
        FieldId::ProfessionalActivity,
        FieldId::CongregationSector,
        FieldId::EcclesiasticalRole,
        FieldId::Email,
        FieldId::Password,
        FieldId::PasswordConfirmation,
        FieldId::PhotoLink,
    ];

    /// JSON key used by the remote registrant store.
    pub fn wire_key(self) -> &'static str {
        match self {
            FieldId::Name => "nome",
            FieldId::BirthDate => "dataNascimento",
            FieldId::Phone => "telefone",
            FieldId::Address => "endereco",
            FieldId::Neighborhood => "bairro",
            FieldId::HouseNumber => "numero",
            FieldId::Complement => "complemento",
            FieldId::ResidenceMunicipality => "municipioResidencia",
            FieldId::CongregationMunicipality => "municipioCongregacao",
            FieldId::ProfessionalActivity => "atividadeProfissional",
            FieldId::CongregationSector => "setorCongregacao",
            FieldId::EcclesiasticalRole => "cargoEclesiastico",
            FieldId::Email => "email",
            FieldId::Password => "senha",
            FieldId::PasswordConfirmation => "senhaConfirmacao",
            FieldId::PhotoLink => "linkFoto",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| field.wire_key() == key)
    }

    /// Form label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Nome",
            FieldId::BirthDate => "Data de nascimento",
            FieldId::Phone => "Telefone",
            FieldId::Address => "Endereço",
            FieldId::Neighborhood => "Bairro",
            FieldId::HouseNumber => "N°",
            FieldId::Complement => "Complemento",
            FieldId::ResidenceMunicipality => "Município de Residência",
            FieldId::CongregationMunicipality => "Município de Congregação",
            FieldId::ProfessionalActivity => "Atividade Profissional",
            FieldId::CongregationSector => "Setor Congregação",
            FieldId::EcclesiasticalRole => "Cargo Eclesiástico",
            FieldId::Email => "E-mail",
            FieldId::Password => "Senha",
            FieldId::PasswordConfirmation => "Confirmar senha",
            FieldId::PhotoLink => "Foto",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::Complement | FieldId::PhotoLink)
    }

    /// Fields whose validity depends on the value of `self`.
    ///
    /// The confirmation is compared against the password, so editing either
    /// one has to refresh the confirmation's message too.
    pub(crate) fn dependents(self) -> &'static [FieldId] {
        match self {
            FieldId::Password | FieldId::PasswordConfirmation => &[FieldId::PasswordConfirmation],
            _ => &[],
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

impl Serialize for FieldId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_key())
    }
}
