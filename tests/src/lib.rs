//! In-memory backend shared by the integration tests.

use domain::backend::{AdminBackend, BackendError, BackendResult, ChatBackend};
use domain::models::{LogEntry, Password};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Chat(String),
    Health,
    Login(String),
    FetchLogs(String),
    FetchPrompt(String),
    UpdatePrompt { password: String, new_prompt: String },
}

/// Backend double driven by canned answers. Records every call it receives
/// and, separately, the order in which calls finished.
pub struct ScriptedBackend {
    chat_reply: Option<String>,
    admin_password: String,
    reachable: bool,
    logs: Vec<LogEntry>,
    system_prompt: String,
    accept_updates: bool,
    logs_delay: Duration,
    calls: Mutex<Vec<Call>>,
    completed: Mutex<Vec<Call>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            chat_reply: None,
            admin_password: "admin".to_string(),
            reachable: true,
            logs: Vec::new(),
            system_prompt: String::new(),
            accept_updates: true,
            logs_delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_logs(mut self, logs: Vec<LogEntry>) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.system_prompt = prompt.to_string();
        self
    }

    pub fn rejecting_updates(mut self) -> Self {
        self.accept_updates = false;
        self
    }

    /// Holds every `/admin/logs` answer back for `delay`.
    pub fn with_logs_delay(mut self, delay: Duration) -> Self {
        self.logs_delay = delay;
        self
    }

    pub fn replying(reply: &str) -> Self {
        Self {
            chat_reply: Some(reply.to_string()),
            ..Self::new()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Calls in the order their answers were produced.
    pub fn completions(&self) -> Vec<Call> {
        self.completed.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| matches(c)).count()
    }

    fn record(&self, call: Call) -> BackendResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.reachable {
            Ok(())
        } else {
            Err(BackendError::Unreachable("connection refused".to_string()))
        }
    }

    fn complete<T>(&self, call: Call, result: BackendResult<T>) -> BackendResult<T> {
        if let Ok(mut completed) = self.completed.lock() {
            completed.push(call);
        }
        result
    }

    fn authorize(&self, password: &Password) -> BackendResult<()> {
        if password.expose() == self.admin_password {
            Ok(())
        } else {
            Err(BackendError::Rejected { status: 401 })
        }
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBackend for ScriptedBackend {
    async fn chat(&self, message: &str) -> BackendResult<String> {
        self.record(Call::Chat(message.to_string()))?;
        self.chat_reply
            .clone()
            .ok_or(BackendError::Rejected { status: 500 })
    }

    async fn health(&self) -> BackendResult<()> {
        self.record(Call::Health)
    }
}

impl AdminBackend for ScriptedBackend {
    async fn login(&self, password: &Password) -> BackendResult<()> {
        self.record(Call::Login(password.expose().to_string()))?;
        self.authorize(password)
    }

    async fn fetch_logs(&self, password: &Password) -> BackendResult<Vec<LogEntry>> {
        let call = Call::FetchLogs(password.expose().to_string());
        self.record(call.clone())?;
        if !self.logs_delay.is_zero() {
            tokio::time::sleep(self.logs_delay).await;
        }
        let result = self.authorize(password).map(|()| self.logs.clone());
        self.complete(call, result)
    }

    async fn fetch_system_prompt(&self, password: &Password) -> BackendResult<String> {
        let call = Call::FetchPrompt(password.expose().to_string());
        self.record(call.clone())?;
        let result = self.authorize(password).map(|()| self.system_prompt.clone());
        self.complete(call, result)
    }

    async fn update_system_prompt(&self, password: &Password, new_prompt: &str) -> BackendResult<()> {
        self.record(Call::UpdatePrompt {
            password: password.expose().to_string(),
            new_prompt: new_prompt.to_string(),
        })?;
        self.authorize(password)?;
        if self.accept_updates {
            Ok(())
        } else {
            Err(BackendError::Rejected { status: 500 })
        }
    }
}

pub fn log(timestamp: &str, user: &str, bot: &str) -> LogEntry {
    LogEntry {
        timestamp: timestamp.to_string(),
        user: user.to_string(),
        bot: bot.to_string(),
    }
}
