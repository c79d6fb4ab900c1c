//! UI state for rendering.

use medcare_core::{Category, DailySchedule, Message, Sender};
use medcare_tui_components::{ChatMessage, ChatRole, Tone};

/// Text shown in the dialog when an emergency alert went out.
pub const ALERT_SENT: &str = "Emergency protocols activated. Emergency contacts have been notified.";

/// Snapshot of data for rendering (no async, no locks).
#[derive(Debug, Default)]
pub struct UiState {
    /// Display name of the user.
    pub user_name: String,

    /// Conversation as received from the backend, in arrival order.
    pub messages: Vec<ChatMessage>,

    /// Current contents of the input field.
    pub input: String,

    /// Cursor position in the input, in characters.
    pub cursor: usize,

    /// The assistant is preparing a reply; input is locked.
    pub thinking: bool,

    /// Lines scrolled back from the newest message.
    pub scroll_back: usize,

    /// Non-fatal notice for the footer.
    pub notice: Option<String>,

    /// Modal alert text, shown until dismissed.
    pub alert: Option<String>,

    /// Today's medicines, for the side panel and header stats.
    pub schedule: DailySchedule,

    pub should_quit: bool,
}

impl UiState {
    pub fn new(user_name: impl Into<String>, schedule: DailySchedule) -> Self {
        Self {
            user_name: user_name.into(),
            schedule,
            ..Self::default()
        }
    }

    /// Add a conversation message and follow the newest line.
    pub fn push_message(&mut self, message: &Message) {
        self.messages.push(to_chat_message(message));
        self.scroll_back = 0;
    }

    /// Insert a character at the cursor (unicode-safe).
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at(self.cursor);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.remove_at(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    /// Replace the input (e.g. with a voice transcript).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor = self.input.chars().count();
    }

    /// Take the input for sending, leaving the field empty.
    ///
    /// Returns `None` for blank input, which is left untouched.
    pub fn take_input(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.input))
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn remove_at(&mut self, char_idx: usize) {
        if let Some((byte_idx, ch)) = self.input.char_indices().nth(char_idx) {
            self.input
                .replace_range(byte_idx..byte_idx + ch.len_utf8(), "");
        }
    }
}

/// Convert a conversation message into the chat widget's representation.
pub fn to_chat_message(message: &Message) -> ChatMessage {
    let role = match message.sender() {
        Sender::User => ChatRole::User,
        Sender::Assistant => ChatRole::Assistant,
    };

    ChatMessage {
        role,
        content: message.text().to_string(),
        timestamp: message.timestamp(),
        tone: message.category().map(tone_for),
        badge: message.emotion().map(|e| e.to_string()),
    }
}

fn tone_for(category: Category) -> Tone {
    match category {
        Category::Suggestion => Tone::Suggestion,
        Category::Warning => Tone::Warning,
        Category::Info => Tone::Info,
        Category::Emergency => Tone::Emergency,
    }
}
