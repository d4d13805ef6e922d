use crate::config::Config;
use crate::credentials::{CredentialTransport, PlaintextPassword};
use domain::backend::{AdminBackend, BackendError, BackendResult, ChatBackend};
use domain::models::{LogEntry, Password};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::telemetry::RequestTimer;
use shared::types::Result;
use std::sync::Arc;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

#[derive(Deserialize)]
struct SystemPromptReply {
    system_prompt: String,
}

#[derive(Deserialize)]
struct HealthReply {
    #[serde(default)]
    status: String,
}

/// HTTP client for the eCOMET assistant backend.
#[derive(Clone)]
pub struct EcometClient {
    client: Arc<Client>,
    config: Config,
    transport: Arc<dyn CredentialTransport>,
}

impl EcometClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_transport(config, Arc::new(PlaintextPassword))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn CredentialTransport>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ecomet-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client: Arc::new(client),
            config: config.clone(),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Sends the request and maps transport failures and non-2xx statuses.
    async fn dispatch(&self, method: &str, path: &str, request: RequestBuilder) -> BackendResult<Response> {
        let timer = RequestTimer::start();
        let outcome = request.send().await;
        match outcome {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(
                    method,
                    path,
                    status = status.as_u16(),
                    elapsed_ms = timer.elapsed_ms() as u64,
                    "backend responded"
                );
                if status.is_success() {
                    Ok(response)
                } else {
                    Err(BackendError::Rejected {
                        status: status.as_u16(),
                    })
                }
            }
            Err(err) => {
                tracing::debug!(
                    method,
                    path,
                    elapsed_ms = timer.elapsed_ms() as u64,
                    error = %err,
                    "backend request failed"
                );
                Err(BackendError::Unreachable(err.to_string()))
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        let body = response
            .bytes()
            .await
            .map_err(|err| BackendError::Unreachable(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| BackendError::Malformed(err.to_string()))
    }

    fn json_body(&self, password: &Password, fields: Map<String, Value>) -> Value {
        let mut body = fields;
        self.transport.authorize_body(&mut body, password);
        Value::Object(body)
    }
}

impl ChatBackend for EcometClient {
    async fn chat(&self, message: &str) -> BackendResult<String> {
        let request = self
            .client
            .post(self.url("/chat"))
            .json(&ChatRequest { message });
        let response = self.dispatch("POST", "/chat", request).await?;
        let reply: ChatReply = Self::decode(response).await?;
        Ok(reply.response)
    }

    async fn health(&self) -> BackendResult<()> {
        let request = self.client.get(self.url("/health"));
        let response = self.dispatch("GET", "/health", request).await?;
        let reply: HealthReply = Self::decode(response).await?;
        if reply.status == "ok" {
            Ok(())
        } else {
            Err(BackendError::Malformed(format!(
                "unexpected health status {:?}",
                reply.status
            )))
        }
    }
}

impl AdminBackend for EcometClient {
    async fn login(&self, password: &Password) -> BackendResult<()> {
        let request = self
            .client
            .post(self.url("/admin/login"))
            .json(&self.json_body(password, Map::new()));
        self.dispatch("POST", "/admin/login", request).await?;
        Ok(())
    }

    async fn fetch_logs(&self, password: &Password) -> BackendResult<Vec<LogEntry>> {
        let request = self
            .transport
            .authorize_query(self.client.get(self.url("/admin/logs")), password);
        let response = self.dispatch("GET", "/admin/logs", request).await?;
        Self::decode(response).await
    }

    async fn fetch_system_prompt(&self, password: &Password) -> BackendResult<String> {
        let request = self
            .transport
            .authorize_query(self.client.get(self.url("/admin/system-prompt")), password);
        let response = self.dispatch("GET", "/admin/system-prompt", request).await?;
        let reply: SystemPromptReply = Self::decode(response).await?;
        Ok(reply.system_prompt)
    }

    async fn update_system_prompt(&self, password: &Password, new_prompt: &str) -> BackendResult<()> {
        let mut fields = Map::new();
        fields.insert(
            "new_prompt".to_string(),
            Value::String(new_prompt.to_string()),
        );
        let request = self
            .client
            .post(self.url("/admin/system-prompt"))
            .json(&self.json_body(password, fields));
        self.dispatch("POST", "/admin/system-prompt", request).await?;
        Ok(())
    }
}
