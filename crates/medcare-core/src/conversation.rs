//! Append-only conversation history for a session.

use crate::chat::Message;

/// Ordered, append-only sequence of messages.
///
/// There is no way to remove or reorder messages; the conversation lives
/// exactly as long as the session that owns it.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the conversation.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in arrival order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Category, Emotion};

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new();
        for i in 0..50 {
            conversation.append(Message::user(format!("message {}", i)));
        }

        assert_eq!(conversation.len(), 50);
        for (i, msg) in conversation.iter().enumerate() {
            assert_eq!(msg.text(), format!("message {}", i));
        }
    }

    #[test]
    fn test_last_is_most_recent_append() {
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());

        conversation.append(Message::user("first"));
        conversation.append(Message::assistant("second", Category::Info, Emotion::Happy));

        assert_eq!(conversation.last().map(|m| m.text()), Some("second"));
        assert_eq!(conversation.all()[0].text(), "first");
    }
}
