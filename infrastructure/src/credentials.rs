use domain::models::Password;
use reqwest::RequestBuilder;
use serde_json::{Map, Value};

/// How the operator password travels with privileged requests.
///
/// The backend grants no session token, so every call re-sends the credential.
pub trait CredentialTransport: Send + Sync {
    fn authorize_query(&self, request: RequestBuilder, password: &Password) -> RequestBuilder;

    fn authorize_body(&self, body: &mut Map<String, Value>, password: &Password);
}

/// `?password=` on reads, a `password` field in JSON bodies on writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextPassword;

impl CredentialTransport for PlaintextPassword {
    fn authorize_query(&self, request: RequestBuilder, password: &Password) -> RequestBuilder {
        request.query(&[("password", password.expose())])
    }

    fn authorize_body(&self, body: &mut Map<String, Value>, password: &Password) {
        body.insert(
            "password".to_string(),
            Value::String(password.expose().to_string()),
        );
    }
}
