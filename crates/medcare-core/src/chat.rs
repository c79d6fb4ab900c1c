//! Chat message types for the assistant conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::MessageId;

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The patient typing or speaking.
    User,
    /// The health companion.
    Assistant,
}

/// Classification of an assistant response, drives visual treatment and urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Suggestion,
    Warning,
    Info,
    Emergency,
}

impl Category {
    /// Returns true if the response must be surfaced as urgent.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Emergency)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suggestion => "suggestion",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotional tone attached to an assistant response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Concerned,
    Encouraging,
    Urgent,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Concerned => "concerned",
            Self::Encouraging => "encouraging",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in the conversation.
///
/// Messages are immutable once created. Assistant messages always carry a
/// category and an emotion; user messages carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emotion: Option<Emotion>,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::generate(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            category: None,
            emotion: None,
        }
    }

    /// Create an assistant message.
    pub fn assistant(text: impl Into<String>, category: Category, emotion: Emotion) -> Self {
        Self {
            id: MessageId::generate(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            category: Some(category),
            emotion: Some(emotion),
        }
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn emotion(&self) -> Option<Emotion> {
        self.emotion
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_tags() {
        let msg = Message::user("hello");
        assert!(msg.is_from_user());
        assert_eq!(msg.category(), None);
        assert_eq!(msg.emotion(), None);
    }

    #[test]
    fn test_assistant_message_serializes_lowercase_tags() {
        let msg = Message::assistant("call 911", Category::Emergency, Emotion::Urgent);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "assistant");
        assert_eq!(json["category"], "emergency");
        assert_eq!(json["emotion"], "urgent");
    }

    #[test]
    fn test_category_urgency() {
        assert!(Category::Emergency.is_urgent());
        assert!(!Category::Warning.is_urgent());
    }
}
