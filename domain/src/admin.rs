//! Password-gated admin console: log viewer and system prompt editor.

use crate::models::{
    LogEntry, Password, BACKEND_ERROR, INVALID_PASSWORD, PROMPT_UPDATED, PROMPT_UPDATE_FAILED,
};
use crate::sequencing::{RequestKind, Sequencer, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Unauthenticated,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Logs,
    Prompt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent {
    PasswordEdited(String),
    LoginRequested,
    LoginSucceeded(Ticket),
    LoginRejected(Ticket),
    LoginUnreachable(Ticket),
    Logout,
    RefreshLogs,
    LogsLoaded(Ticket, Vec<LogEntry>),
    LogsFailed(Ticket),
    PromptLoaded(Ticket, String),
    PromptFailed(Ticket),
    PromptEdited(String),
    SaveRequested,
    SaveSucceeded(Ticket),
    SaveFailed(Ticket),
    TabSelected(Tab),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEffect {
    Login {
        ticket: Ticket,
        password: Password,
    },
    FetchLogs {
        ticket: Ticket,
        password: Password,
    },
    FetchPrompt {
        ticket: Ticket,
        password: Password,
    },
    SavePrompt {
        ticket: Ticket,
        password: Password,
        new_prompt: String,
    },
    /// Blocking notification for the operator.
    Notify(String),
}

#[derive(Debug)]
pub struct AdminConsole {
    gate: Gate,
    password: Password,
    /// Password sent with the outstanding login request.
    attempt: Option<Password>,
    /// Password the backend accepted; used for every privileged request.
    credential: Password,
    tab: Tab,
    logs: Vec<LogEntry>,
    prompt: String,
    status: Option<String>,
    sequencer: Sequencer,
}

impl AdminConsole {
    pub fn new() -> Self {
        Self {
            gate: Gate::Unauthenticated,
            password: Password::default(),
            attempt: None,
            credential: Password::default(),
            tab: Tab::default(),
            logs: Vec::new(),
            prompt: String::new(),
            status: None,
            sequencer: Sequencer::new(),
        }
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn is_authenticated(&self) -> bool {
        self.gate == Gate::Authenticated
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Logs as received from the backend.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Logs in display order, most recent first.
    pub fn display_logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().rev()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn apply(&mut self, event: AdminEvent) -> Vec<AdminEffect> {
        match event {
            AdminEvent::PasswordEdited(password) => {
                self.password = Password::new(password);
                Vec::new()
            }
            AdminEvent::LoginRequested => {
                if self.is_authenticated() {
                    return Vec::new();
                }
                let ticket = self.sequencer.issue(RequestKind::Login);
                self.attempt = Some(self.password.clone());
                vec![AdminEffect::Login {
                    ticket,
                    password: self.password.clone(),
                }]
            }
            AdminEvent::LoginSucceeded(ticket) => {
                if !self.sequencer.settle(&ticket) {
                    return Vec::new();
                }
                // Edits made while the login was in flight were never verified.
                self.credential = self.attempt.take().unwrap_or_default();
                self.gate = Gate::Authenticated;
                let logs = self.sequencer.issue(RequestKind::Logs);
                let prompt = self.sequencer.issue(RequestKind::Prompt);
                vec![
                    AdminEffect::FetchLogs {
                        ticket: logs,
                        password: self.credential.clone(),
                    },
                    AdminEffect::FetchPrompt {
                        ticket: prompt,
                        password: self.credential.clone(),
                    },
                ]
            }
            AdminEvent::LoginRejected(ticket) => self.login_failed(ticket, INVALID_PASSWORD),
            AdminEvent::LoginUnreachable(ticket) => self.login_failed(ticket, BACKEND_ERROR),
            AdminEvent::Logout => {
                // Purely local; nothing on the backend is revoked.
                self.gate = Gate::Unauthenticated;
                self.password = Password::default();
                self.attempt = None;
                self.credential = Password::default();
                self.tab = Tab::default();
                self.logs.clear();
                self.prompt.clear();
                self.status = None;
                self.sequencer.invalidate_all();
                Vec::new()
            }
            AdminEvent::RefreshLogs => {
                if !self.is_authenticated() {
                    return Vec::new();
                }
                let ticket = self.sequencer.issue(RequestKind::Logs);
                vec![AdminEffect::FetchLogs {
                    ticket,
                    password: self.credential.clone(),
                }]
            }
            AdminEvent::LogsLoaded(ticket, entries) => {
                if self.sequencer.settle(&ticket) {
                    self.logs = entries;
                }
                Vec::new()
            }
            AdminEvent::PromptLoaded(ticket, prompt) => {
                if self.sequencer.settle(&ticket) {
                    self.prompt = prompt;
                }
                Vec::new()
            }
            // Fetch failures keep whatever was shown before.
            AdminEvent::LogsFailed(ticket) | AdminEvent::PromptFailed(ticket) => {
                self.sequencer.settle(&ticket);
                Vec::new()
            }
            AdminEvent::PromptEdited(prompt) => {
                self.prompt = prompt;
                Vec::new()
            }
            AdminEvent::SaveRequested => {
                if !self.is_authenticated() {
                    return Vec::new();
                }
                let ticket = self.sequencer.issue(RequestKind::Save);
                vec![AdminEffect::SavePrompt {
                    ticket,
                    password: self.credential.clone(),
                    new_prompt: self.prompt.clone(),
                }]
            }
            AdminEvent::SaveSucceeded(ticket) => {
                if self.sequencer.settle(&ticket) {
                    self.status = Some(PROMPT_UPDATED.to_string());
                }
                Vec::new()
            }
            AdminEvent::SaveFailed(ticket) => {
                if self.sequencer.settle(&ticket) {
                    self.status = Some(PROMPT_UPDATE_FAILED.to_string());
                }
                Vec::new()
            }
            AdminEvent::TabSelected(tab) => {
                if self.is_authenticated() {
                    self.tab = tab;
                }
                Vec::new()
            }
        }
    }

    fn login_failed(&mut self, ticket: Ticket, notice: &str) -> Vec<AdminEffect> {
        if !self.sequencer.settle(&ticket) {
            return Vec::new();
        }
        self.attempt = None;
        vec![AdminEffect::Notify(notice.to_string())]
    }
}

impl Default for AdminConsole {
    fn default() -> Self {
        Self::new()
    }
}
