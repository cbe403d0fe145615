use reqwest::Client;
use serde::Deserialize;

use crate::config::ApiClientConfig;

/// Shared client for every adapter talking to the registrant API.
///
/// The configured timeout bounds the whole request, connect included.
pub fn build_http_client(config: &ApiClientConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(concat!("cadastro/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[derive(Deserialize)]
struct ErrorMessage {
    message: Option<String>,
}

/// Error detail for a non-success response.
///
/// The API's `{"message": ...}` field when present, otherwise the raw body.
/// Empty if the body is unreadable.
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    error_message(body)
}

fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorMessage>(&body) {
        Ok(ErrorMessage {
            message: Some(message),
        }) if !message.trim().is_empty() => message,
        _ => body,
    }
}
