use async_trait::async_trait;
use cad_core::ports::{PersistenceError, RegistrantPersistencePort};
use cad_core::RegistrationPayload;
use reqwest::Client;
use tracing::debug;

use super::client::error_body;
use crate::config::ApiClientConfig;

/// Posts registrants as JSON to `{base_url}{registrant_path}`.
pub struct HttpRegistrantRepository {
    client: Client,
    url: String,
}

impl HttpRegistrantRepository {
    pub fn new(client: Client, config: &ApiClientConfig) -> Self {
        Self {
            client,
            url: config.registrant_url(),
        }
    }
}

#[async_trait]
impl RegistrantPersistencePort for HttpRegistrantRepository {
    async fn save(&self, payload: &RegistrationPayload) -> Result<(), PersistenceError> {
        debug!(method = "POST", url = %self.url, ?payload, "Registrant request");

        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(url = %self.url, status = status.as_u16(), "Registrant response");

        if status.is_success() {
            return Ok(());
        }

        Err(PersistenceError::Rejected {
            status: status.as_u16(),
            message: error_body(response).await,
        })
    }
}

fn transport_error(err: reqwest::Error) -> PersistenceError {
    if err.is_timeout() {
        PersistenceError::Timeout
    } else {
        PersistenceError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::build_http_client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn payload() -> RegistrationPayload {
        RegistrationPayload {
            name: "Maria da Silva".into(),
            birth_date: "1990-10-05".into(),
            phone: "(65) 99999-1234".into(),
            address: "Rua das Flores".into(),
            neighborhood: "Centro".into(),
            house_number: "120".into(),
            complement: None,
            residence_municipality: "cuiaba".into(),
            congregation_municipality: "varzea-grande".into(),
            professional_activity: "Professora".into(),
            congregation_sector: "Setor 2".into(),
            ecclesiastical_role: "Diaconisa".into(),
            email: "maria@example.com".into(),
            password: "segredo1".into(),
            password_confirmation: "segredo1".into(),
            photo_link: Some("file:///photos/maria.jpg".into()),
        }
    }

    fn repository(base_url: String) -> HttpRegistrantRepository {
        let config = ApiClientConfig {
            base_url,
            ..ApiClientConfig::defaults()
        };
        HttpRegistrantRepository::new(build_http_client(&config).unwrap(), &config)
    }

    #[tokio::test]
    async fn posts_payload_as_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/pessoa")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "nome": "Maria da Silva",
                "dataNascimento": "1990-10-05",
                "linkFoto": "file:///photos/maria.jpg",
            })))
            .with_status(201)
            .create_async()
            .await;

        repository(server.url()).save(&payload()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_with_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/pessoa")
            .with_status(409)
            .with_body("e-mail já cadastrado")
            .create_async()
            .await;

        let err = repository(server.url()).save(&payload()).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err,
            PersistenceError::Rejected {
                status: 409,
                message: "e-mail já cadastrado".into(),
            }
        );
    }

    #[tokio::test]
    async fn json_error_surfaces_its_message() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/pessoa")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"statusCode":400,"message":"CPF inválido"}"#)
            .create_async()
            .await;

        let err = repository(server.url()).save(&payload()).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            err,
            PersistenceError::Rejected {
                status: 400,
                message: "CPF inválido".into(),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let err = repository("http://127.0.0.1:1".into())
            .save(&payload())
            .await
            .unwrap_err();

        assert!(matches!(err, PersistenceError::Network(_)));
    }
}
