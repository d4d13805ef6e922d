use crate::models::{Message, CHAT_FALLBACK, GREETING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Submit(String),
    ReplyReceived(String),
    ReplyFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    PostChat { message: String },
}

/// Transcript plus single-flight request state for one chat console.
///
/// Turns are only ever appended. At most one `/chat` request is outstanding;
/// submits while `Sending` are dropped rather than queued.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    phase: ChatPhase,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_transcript(vec![Message::bot(GREETING)])
    }

    pub fn with_transcript(messages: Vec<Message>) -> Self {
        Self {
            messages,
            input: String::new(),
            phase: ChatPhase::Idle,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_bot_reply(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == crate::models::Role::Bot)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ChatPhase::Sending
    }

    pub fn apply(&mut self, event: ChatEvent) -> Option<ChatEffect> {
        match (self.phase, event) {
            (ChatPhase::Idle, ChatEvent::Submit(text)) => {
                let message = text.trim();
                if message.is_empty() {
                    return None;
                }
                let message = message.to_string();
                self.messages.push(Message::user(message.clone()));
                self.input.clear();
                self.phase = ChatPhase::Sending;
                Some(ChatEffect::PostChat { message })
            }
            (ChatPhase::Sending, ChatEvent::ReplyReceived(reply)) => {
                self.messages.push(Message::bot(reply));
                self.phase = ChatPhase::Idle;
                None
            }
            (ChatPhase::Sending, ChatEvent::ReplyFailed) => {
                self.messages.push(Message::bot(CHAT_FALLBACK));
                self.phase = ChatPhase::Idle;
                None
            }
            // Submits while sending and replies while idle have nothing to act on.
            _ => None,
        }
    }

    /// Submits the current draft input.
    pub fn submit_input(&mut self) -> Option<ChatEffect> {
        let draft = self.input.clone();
        self.apply(ChatEvent::Submit(draft))
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
