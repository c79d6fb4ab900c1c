//! Chat widget for displaying conversation messages.

use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::{Theme, Tone};
use crate::utils::wrap_text_indented;

/// Role of a chat message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message as the widget draws it.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Coloring for assistant messages.
    pub tone: Option<Tone>,
    /// Short marker shown after the sender name, e.g. an emotion.
    pub badge: Option<String>,
}

/// Configuration for the chat widget.
#[derive(Debug, Clone)]
pub struct ChatWidget<'a> {
    /// Messages to display.
    messages: &'a [ChatMessage],
    /// Label shown while the assistant prepares a reply.
    thinking: Option<&'a str>,
    /// Lines scrolled back from the bottom (0 = follow newest).
    scroll_back: usize,
    /// Whether the widget is focused.
    focused: bool,
    /// Name shown for assistant messages.
    assistant_name: &'a str,
    /// Title override.
    title: Option<String>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> ChatWidget<'a> {
    /// Create a new chat widget.
    pub fn new(messages: &'a [ChatMessage]) -> Self {
        Self {
            messages,
            thinking: None,
            scroll_back: 0,
            focused: false,
            assistant_name: "Assistant",
            title: None,
            theme: Theme::default(),
        }
    }

    /// Show a thinking indicator below the last message.
    pub fn thinking(mut self, label: Option<&'a str>) -> Self {
        self.thinking = label;
        self
    }

    /// Scroll back `lines` from the newest message.
    pub fn scroll_back(mut self, lines: usize) -> Self {
        self.scroll_back = lines;
        self
    }

    /// Set whether the widget is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn assistant_name(mut self, name: &'a str) -> Self {
        self.assistant_name = name;
        self
    }

    /// Set a custom title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Build every line of the transcript for the given text width.
    pub fn lines(&self, text_width: usize) -> Vec<Line<'static>> {
        let mut all_lines: Vec<Line<'static>> = Vec::new();

        for msg in self.messages {
            let (prefix, header_style, body_style) = match msg.role {
                ChatRole::User => (
                    "You".to_string(),
                    self.theme.user_style().add_modifier(Modifier::BOLD),
                    self.theme.user_style(),
                ),
                ChatRole::Assistant => {
                    let tone = msg.tone.unwrap_or(Tone::Info);
                    (
                        self.assistant_name.to_string(),
                        self.theme.tone_style(tone).add_modifier(Modifier::BOLD),
                        self.theme.tone_style(tone),
                    )
                }
            };

            let mut header = vec![Span::styled(format!("{}: ", prefix), header_style)];
            if let Some(badge) = &msg.badge {
                header.push(Span::styled(format!("[{}] ", badge), header_style));
            }
            header.push(Span::styled(
                msg.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string(),
                self.theme.muted_style(),
            ));
            all_lines.push(Line::from(header));

            for wrapped_line in wrap_text_indented(&msg.content, text_width, "  ") {
                all_lines.push(Line::from(Span::styled(wrapped_line, body_style)));
            }

            // Blank line between messages
            all_lines.push(Line::from(""));
        }

        if let Some(label) = self.thinking {
            all_lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", self.assistant_name),
                    self.theme.assistant_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled(label.to_string(), self.theme.muted_style()),
            ]));
        }

        all_lines
    }

    /// Render the widget.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let visible_height = area.height.saturating_sub(2) as usize;
        let text_width = area.width.saturating_sub(2) as usize;

        let all_lines = self.lines(text_width);
        let total_lines = all_lines.len();

        // Calculate scroll position
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = max_scroll.saturating_sub(self.scroll_back);

        let lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .collect();

        let first_line = (scroll_offset + 1).min(total_lines);
        let last_line = (scroll_offset + visible_height).min(total_lines);
        let title = self
            .title
            .unwrap_or_else(|| format!(" Chat [{}-{}/{}] ", first_line, last_line, total_lines));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}
