//! `cadastro submit` against a mock registrant API.

use std::io::Write;
use std::sync::{Arc, Mutex};

use cad_app::SubmitOutcome;
use cad_core::ports::NoticePort;
use cad_core::{FieldId, Notice};
use cad_infra::config::{ApiClientConfig, CadastroConfig};
use cadastro_lib::bootstrap::run::submit_profile;
use cadastro_lib::bootstrap::wire_dependencies;
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::NamedTempFile;

#[derive(Default)]
struct Notices(Mutex<Vec<Notice>>);

impl NoticePort for Notices {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

fn config(base_url: String) -> CadastroConfig {
    CadastroConfig {
        api: ApiClientConfig {
            base_url,
            ..ApiClientConfig::defaults()
        },
        ..CadastroConfig::default()
    }
}

fn profile_file(profile: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(profile.to_string().as_bytes()).unwrap();
    file
}

fn valid_profile() -> serde_json::Value {
    json!({
        "nome": "Ana Souza",
        "dataNascimento": "29/02/2000",
        "telefone": "(66) 3531-2200",
        "endereco": "Rua Colonizador Ênio Pipino",
        "bairro": "Setor Comercial",
        "numero": "88",
        "municipioResidencia": "sinop",
        "municipioCongregacao": "sorriso",
        "atividadeProfissional": "Enfermeira",
        "setorCongregacao": "Setor 1",
        "cargoEclesiastico": "Membro",
        "email": "ana.souza@example.com",
        "senha": "ana2000",
        "senhaConfirmacao": "ana2000"
    })
}

#[tokio::test]
async fn valid_profile_is_posted_with_canonical_date() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/pessoa")
        .match_body(Matcher::PartialJson(json!({
            "nome": "Ana Souza",
            "dataNascimento": "2000-02-29",
            "municipioResidencia": "sinop",
        })))
        .with_status(201)
        .expect(1)
        .create_async()
        .await;

    let notices = Arc::new(Notices::default());
    let deps = wire_dependencies(&config(server.url()), notices.clone()).unwrap();
    let file = profile_file(valid_profile());

    let outcome = submit_profile(&deps, file.path()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(*notices.0.lock().unwrap(), vec![Notice::Registered]);
}

#[tokio::test]
async fn invalid_profile_never_reaches_the_api() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/pessoa")
        .expect(0)
        .create_async()
        .await;

    let notices = Arc::new(Notices::default());
    let deps = wire_dependencies(&config(server.url()), notices.clone()).unwrap();
    let mut profile = valid_profile();
    profile["senhaConfirmacao"] = json!("ana2001");
    let file = profile_file(profile);

    let outcome = submit_profile(&deps, file.path()).await.unwrap();

    mock.assert_async().await;
    let SubmitOutcome::Blocked { errors } = outcome else {
        panic!("expected blocked outcome, got {outcome:?}");
    };
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![FieldId::PasswordConfirmation]
    );
    assert_eq!(*notices.0.lock().unwrap(), vec![Notice::ReviewRequired]);
}

#[tokio::test]
async fn server_error_is_a_generic_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/pessoa")
        .with_status(500)
        .create_async()
        .await;

    let notices = Arc::new(Notices::default());
    let deps = wire_dependencies(&config(server.url()), notices.clone()).unwrap();
    let file = profile_file(valid_profile());

    let outcome = submit_profile(&deps, file.path()).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(*notices.0.lock().unwrap(), vec![Notice::SubmissionFailed]);
}

#[tokio::test]
async fn unreadable_profile_is_an_error() {
    let notices = Arc::new(Notices::default());
    let deps = wire_dependencies(&config("http://127.0.0.1:1".into()), notices.clone()).unwrap();
    let file = profile_file(json!(["not", "a", "profile"]));

    assert!(submit_profile(&deps, file.path()).await.is_err());
    assert!(notices.0.lock().unwrap().is_empty());
}
