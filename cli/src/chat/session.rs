//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//!
//! The chat window's submit handler: a `Conversation` paired with the
//! `Assistant` that answers it. `send` takes `&mut self`, so a session can
//! have at most one message in flight.
//!
use super::assistant::Assistant;
use super::conversation::{ChatMessage, Conversation};
use tracing::debug;

pub struct ChatSession<'a> {
    assistant: &'a Assistant,
    conversation: Conversation,
}

impl<'a> ChatSession<'a> {
    pub fn new(assistant: &'a Assistant) -> Self {
        Self {
            assistant,
            conversation: Conversation::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Sends one message. Blank input is ignored and returns `None`;
    /// otherwise the trimmed message and the reply are appended and the
    /// reply turn is returned.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let message = input.trim();
        if message.is_empty() {
            debug!("Ignoring blank chat input");
            return None;
        }

        self.conversation.append_user_turn(message);
        let reply = self.assistant.generate_response(message).await;
        Some(self.conversation.append_assistant_turn(reply))
    }
}
