use domain::admin::{AdminConsole, AdminEffect, AdminEvent, Tab};
use domain::backend::{AdminBackend, BackendError};
use futures::stream::{FuturesUnordered, StreamExt};

/// Runs an `AdminConsole` against a backend.
///
/// Every operation returns the notifications raised while it ran, in order.
pub struct AdminService<B> {
    backend: B,
    console: AdminConsole,
}

impl<B: AdminBackend> AdminService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            console: AdminConsole::new(),
        }
    }

    pub fn console(&self) -> &AdminConsole {
        &self.console
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set_password(&mut self, password: &str) {
        self.console
            .apply(AdminEvent::PasswordEdited(password.to_string()));
    }

    /// Tries the current password. On success the log and prompt fetches run concurrently.
    pub async fn login(&mut self) -> Vec<String> {
        self.dispatch(AdminEvent::LoginRequested).await
    }

    pub async fn logout(&mut self) -> Vec<String> {
        tracing::info!("admin logged out");
        self.dispatch(AdminEvent::Logout).await
    }

    pub async fn refresh_logs(&mut self) -> Vec<String> {
        self.dispatch(AdminEvent::RefreshLogs).await
    }

    pub fn edit_prompt(&mut self, prompt: &str) {
        self.console
            .apply(AdminEvent::PromptEdited(prompt.to_string()));
    }

    /// Saves the local prompt copy. Returns the resulting status line.
    pub async fn update_prompt(&mut self) -> Option<&str> {
        self.dispatch(AdminEvent::SaveRequested).await;
        self.console.status()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.console.apply(AdminEvent::TabSelected(tab));
    }

    async fn dispatch(&mut self, event: AdminEvent) -> Vec<String> {
        let effects = self.console.apply(event);
        self.drive(effects).await
    }

    /// Executes effects until the console stops producing new ones.
    /// Responses are applied in arrival order; the console discards stale ones.
    async fn drive(&mut self, effects: Vec<AdminEffect>) -> Vec<String> {
        let mut notices = Vec::new();
        let mut queue = effects;

        while !queue.is_empty() {
            let mut in_flight = FuturesUnordered::new();
            for effect in queue.drain(..) {
                match effect {
                    AdminEffect::Notify(message) => notices.push(message),
                    request => in_flight.push(execute(&self.backend, request)),
                }
            }
            while let Some(outcome) = in_flight.next().await {
                if let Some(event) = outcome {
                    queue.extend(self.console.apply(event));
                }
            }
        }

        notices
    }
}

async fn execute<B: AdminBackend>(backend: &B, effect: AdminEffect) -> Option<AdminEvent> {
    let event = match effect {
        AdminEffect::Login { ticket, password } => match backend.login(&password).await {
            Ok(()) => {
                tracing::info!("admin login accepted");
                AdminEvent::LoginSucceeded(ticket)
            }
            Err(BackendError::Rejected { status }) => {
                tracing::info!(status, "admin login rejected");
                AdminEvent::LoginRejected(ticket)
            }
            Err(err) => {
                tracing::warn!(error = %err, "admin login failed");
                AdminEvent::LoginUnreachable(ticket)
            }
        },
        AdminEffect::FetchLogs { ticket, password } => match backend.fetch_logs(&password).await {
            Ok(entries) => AdminEvent::LogsLoaded(ticket, entries),
            Err(err) => {
                tracing::debug!(error = %err, "log fetch failed");
                AdminEvent::LogsFailed(ticket)
            }
        },
        AdminEffect::FetchPrompt { ticket, password } => {
            match backend.fetch_system_prompt(&password).await {
                Ok(prompt) => AdminEvent::PromptLoaded(ticket, prompt),
                Err(err) => {
                    tracing::debug!(error = %err, "system prompt fetch failed");
                    AdminEvent::PromptFailed(ticket)
                }
            }
        }
        AdminEffect::SavePrompt {
            ticket,
            password,
            new_prompt,
        } => match backend.update_system_prompt(&password, &new_prompt).await {
            Ok(()) => AdminEvent::SaveSucceeded(ticket),
            Err(err) => {
                tracing::warn!(error = %err, "system prompt update failed");
                AdminEvent::SaveFailed(ticket)
            }
        },
        // Notifications are surfaced by `drive`, never sent anywhere.
        AdminEffect::Notify(_) => return None,
    };
    Some(event)
}
