use crate::models::{LogEntry, Password};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend rejected request with status {status}")]
    Rejected { status: u16 },

    #[error("unexpected response body: {0}")]
    Malformed(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

pub trait ChatBackend {
    /// POST `/chat`; yields the bot's answer.
    fn chat(&self, message: &str) -> impl Future<Output = BackendResult<String>> + Send;

    fn health(&self) -> impl Future<Output = BackendResult<()>> + Send;
}

/// Privileged endpoints. Every call carries the operator password; there is no session token.
pub trait AdminBackend {
    fn login(&self, password: &Password) -> impl Future<Output = BackendResult<()>> + Send;

    fn fetch_logs(
        &self,
        password: &Password,
    ) -> impl Future<Output = BackendResult<Vec<LogEntry>>> + Send;

    fn fetch_system_prompt(
        &self,
        password: &Password,
    ) -> impl Future<Output = BackendResult<String>> + Send;

    fn update_system_prompt(
        &self,
        password: &Password,
        new_prompt: &str,
    ) -> impl Future<Output = BackendResult<()>> + Send;
}
