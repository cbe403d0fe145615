//! End-to-end registration flow: catalog load, typing, blur, submit.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cad_app::{AppDeps, RegistrationSession, SubmitOutcome};
use cad_core::ports::{
    LivenessError, LivenessSessionPort, MunicipalitySourceError, MunicipalitySourcePort,
    NoticePort, PersistenceError, RegistrantPersistencePort,
};
use cad_core::registration::validation::messages;
use cad_core::{
    FieldId, LivenessSessionId, MunicipalityOption, Notice, RegistrationPayload, ValidationEngine,
};

#[derive(Default)]
struct CapturingStore {
    payloads: Mutex<Vec<serde_json::Value>>,
}

#[async_trait]
impl RegistrantPersistencePort for CapturingStore {
    async fn save(&self, payload: &RegistrationPayload) -> Result<(), PersistenceError> {
        let json = serde_json::to_value(payload)
            .map_err(|e| PersistenceError::Network(e.to_string()))?;
        self.payloads.lock().unwrap().push(json);
        Ok(())
    }
}

#[derive(Default)]
struct CapturingNotices {
    seen: Mutex<Vec<Notice>>,
}

impl NoticePort for CapturingNotices {
    fn notify(&self, notice: Notice) {
        self.seen.lock().unwrap().push(notice);
    }
}

struct MatoGrossoSubset;

#[async_trait]
impl MunicipalitySourcePort for MatoGrossoSubset {
    async fn load(&self) -> Result<Vec<MunicipalityOption>, MunicipalitySourceError> {
        Ok(vec![
            MunicipalityOption::new("Cuiabá", "cuiaba"),
            MunicipalityOption::new("Várzea Grande", "varzea-grande"),
            MunicipalityOption::new("Rondonópolis", "rondonopolis"),
        ])
    }
}

struct UnusedLiveness;

#[async_trait]
impl LivenessSessionPort for UnusedLiveness {
    async fn create_session(&self) -> Result<LivenessSessionId, LivenessError> {
        Err(LivenessError::MissingSessionId)
    }
}

struct Fixture {
    deps: AppDeps,
    store: Arc<CapturingStore>,
    notices: Arc<CapturingNotices>,
}

fn fixture() -> Fixture {
    let store = Arc::new(CapturingStore::default());
    let notices = Arc::new(CapturingNotices::default());
    let deps = AppDeps {
        persistence: store.clone(),
        notices: notices.clone(),
        municipalities: Arc::new(MatoGrossoSubset),
        liveness: Arc::new(UnusedLiveness),
    };
    Fixture {
        deps,
        store,
        notices,
    }
}

async fn open_session(deps: &AppDeps) -> RegistrationSession {
    let catalog = deps.load_municipality_catalog().execute().await.unwrap();
    RegistrationSession::new(ValidationEngine::new(Arc::new(catalog)))
}

fn fill_valid(session: &RegistrationSession) {
    for (field, value) in [
        (FieldId::Name, "João Pereira"),
        (FieldId::BirthDate, "05/10/1990"),
        (FieldId::Phone, "(65) 98888-7777"),
        (FieldId::Address, "Avenida Getúlio Vargas"),
        (FieldId::Neighborhood, "Goiabeira"),
        (FieldId::HouseNumber, "45"),
        (FieldId::ResidenceMunicipality, "rondonopolis"),
        (FieldId::CongregationMunicipality, "cuiaba"),
        (FieldId::ProfessionalActivity, "Motorista"),
        (FieldId::CongregationSector, "Setor 7"),
        (FieldId::EcclesiasticalRole, "Presbítero"),
        (FieldId::Email, "joao@example.com"),
        (FieldId::Password, "abc123"),
        (FieldId::PasswordConfirmation, "abc123"),
    ] {
        session.set_field(field, value);
        session.touch_field(field, None);
    }
}

#[tokio::test]
async fn invalid_email_blocks_submission_with_one_notice() {
    let fx = fixture();
    let session = open_session(&fx.deps).await;
    fill_valid(&session);
    session.set_field(FieldId::Email, "joao.example.com");

    let outcome = fx.deps.submit_registration().execute(&session).await;

    assert!(matches!(outcome, SubmitOutcome::Blocked { .. }));
    assert_eq!(
        session.show_error(FieldId::Email).as_deref(),
        Some(messages::EMAIL_INVALID)
    );
    assert_eq!(session.visible_errors().len(), 1);
    assert_eq!(*fx.notices.seen.lock().unwrap(), vec![Notice::ReviewRequired]);
    assert!(fx.store.payloads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn valid_form_is_submitted_once_with_canonical_birth_date() {
    let fx = fixture();
    let session = open_session(&fx.deps).await;
    fill_valid(&session);
    assert!(session.visible_errors().is_empty());
    assert!(session.can_submit());

    let outcome = fx.deps.submit_registration().execute(&session).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    let payloads = fx.store.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0]["dataNascimento"], "1990-10-05");
    assert_eq!(payloads[0]["municipioResidencia"], "rondonopolis");
    assert!(payloads[0].get("linkFoto").is_none());
    assert_eq!(*fx.notices.seen.lock().unwrap(), vec![Notice::Registered]);
}

#[tokio::test]
async fn fixing_a_field_after_blocked_submit_clears_its_error() {
    let fx = fixture();
    let session = open_session(&fx.deps).await;
    fill_valid(&session);
    session.set_field(FieldId::ResidenceMunicipality, "sao-paulo");

    let blocked = fx.deps.submit_registration().execute(&session).await;
    assert!(matches!(blocked, SubmitOutcome::Blocked { .. }));
    assert_eq!(
        session.show_error(FieldId::ResidenceMunicipality).as_deref(),
        Some(messages::MUNICIPALITY_UNKNOWN)
    );

    session.set_field(FieldId::ResidenceMunicipality, "varzea-grande");
    assert_eq!(session.show_error(FieldId::ResidenceMunicipality), None);

    let outcome = fx.deps.submit_registration().execute(&session).await;
    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(
        *fx.notices.seen.lock().unwrap(),
        vec![Notice::ReviewRequired, Notice::Registered]
    );
}

#[tokio::test]
async fn fresh_form_shows_no_errors_until_blur() {
    let fx = fixture();
    let session = open_session(&fx.deps).await;

    session.set_field(FieldId::Phone, "6599");
    assert!(session.visible_errors().is_empty());

    session.touch_field(FieldId::Phone, None);
    assert_eq!(
        session.show_error(FieldId::Phone).as_deref(),
        Some(messages::PHONE_TOO_SHORT)
    );
    assert_eq!(session.show_error(FieldId::Name), None);
}
