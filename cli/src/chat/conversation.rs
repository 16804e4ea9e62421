//! # Conversation Log
//!
//! File: cli/src/chat/conversation.rs
//!
//! The ordered turn log behind the chat window. It starts with the
//! assistant's greeting and only ever grows: turns are appended at the end
//! and never edited, removed or reordered. Starting over means creating a
//! new `Conversation`.
//!
use super::persona::GREETING;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn. Fields are private so a turn cannot change once logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    role: Role,
    text: String,
}

impl ChatMessage {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            turns: vec![ChatMessage {
                role: Role::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn append_user_turn(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Role::User, text.into())
    }

    pub fn append_assistant_turn(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Role::Assistant, text.into())
    }

    fn push(&mut self, role: Role, text: String) -> &ChatMessage {
        self.turns.push(ChatMessage { role, text });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.len(), 1);
        let first = &conversation.turns()[0];
        assert_eq!(first.role(), Role::Assistant);
        assert_eq!(first.text(), GREETING);
    }

    #[test]
    fn test_appends_in_order() {
        let mut conversation = Conversation::new();
        conversation.append_user_turn("What services do you offer?");
        conversation.append_assistant_turn("Web, mobile, data and more.");
        conversation.append_user_turn("Pricing?");

        let roles: Vec<Role> = conversation.turns().iter().map(ChatMessage::role).collect();
        assert_eq!(
            roles,
            vec![Role::Assistant, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(conversation.last().map(ChatMessage::text), Some("Pricing?"));
    }

    #[test]
    fn test_earlier_turns_unchanged_by_appends() {
        let mut conversation = Conversation::new();
        conversation.append_user_turn("one");
        let snapshot = conversation.turns().to_vec();

        conversation.append_assistant_turn("two");
        assert_eq!(&conversation.turns()[..snapshot.len()], snapshot.as_slice());
    }

    #[test]
    fn test_serializes_as_list_of_turns() {
        let mut conversation = Conversation::new();
        conversation.append_user_turn("hi");
        let json = serde_json::to_value(&conversation).unwrap();
        assert_eq!(json[1], serde_json::json!({ "role": "user", "text": "hi" }));
        assert_eq!(json[0]["role"], "assistant");
    }
}
