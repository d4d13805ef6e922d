use domain::backend::{BackendResult, ChatBackend};
use domain::models::Message;
use domain::session::{ChatEffect, ChatEvent, ChatSession};

/// Runs a `ChatSession` against a backend, one outstanding request at a time.
pub struct ChatService<B> {
    backend: B,
    session: ChatSession,
}

impl<B: ChatBackend> ChatService<B> {
    pub fn new(backend: B) -> Self {
        Self::with_session(backend, ChatSession::new())
    }

    pub fn with_session(backend: B, session: ChatSession) -> Self {
        Self { backend, session }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Appends the user turn. `None` means the submit was ignored.
    pub fn submit(&mut self, text: &str) -> Option<ChatEffect> {
        self.session.apply(ChatEvent::Submit(text.to_string()))
    }

    /// Performs the request and appends the bot turn. Failures become the fallback turn.
    pub async fn resolve(&mut self, effect: ChatEffect) -> Option<&Message> {
        let ChatEffect::PostChat { message } = effect;
        let event = match self.backend.chat(&message).await {
            Ok(reply) => ChatEvent::ReplyReceived(reply),
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                ChatEvent::ReplyFailed
            }
        };
        self.session.apply(event);
        self.session.messages().last()
    }

    /// Submit plus resolve. Returns the bot turn that was appended, if any.
    pub async fn send_message(&mut self, text: &str) -> Option<&Message> {
        let effect = self.submit(text)?;
        self.resolve(effect).await
    }

    pub async fn check_health(&self) -> BackendResult<()> {
        self.backend.health().await
    }
}
