use serde::{Deserialize, Serialize};
use std::fmt;

pub const GREETING: &str =
    "Hello! I'm the eCOMET assistant. Ask me about installation, data input, or analysis workflows.";
pub const CHAT_FALLBACK: &str = "Sorry, something went wrong. Please ensure the backend is running.";
pub const PROMPT_UPDATED: &str = "Prompt updated successfully!";
pub const PROMPT_UPDATE_FAILED: &str = "Failed to update prompt.";
pub const INVALID_PASSWORD: &str = "Invalid Password";
pub const BACKEND_ERROR: &str = "Backend error";
pub const NO_LOGS: &str = "No logs yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }
}

/// One recorded exchange as the backend stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub bot: String,
}

/// Operator password. Held in memory only and re-sent on every privileged call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
