//! Alert dialog and the message input field.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme::Theme;

/// Create a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// A modal alert that must be dismissed.
#[derive(Debug, Clone)]
pub struct AlertDialog<'a> {
    title: &'a str,
    message: &'a str,
    width: u16,
    height: u16,
    theme: Theme,
}

impl<'a> AlertDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            message,
            width: 56,
            height: 8,
            theme: Theme::default(),
        }
    }

    /// Set the dialog size.
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the dialog over whatever is below it.
    pub fn render(self, frame: &mut Frame) {
        let area = centered_rect(self.width, self.height, frame.area());

        frame.render_widget(Clear, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("[Enter] Dismiss", self.theme.muted_style())),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(self.theme.error_style()),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

/// Single-line text input with a cursor.
#[derive(Debug, Clone)]
pub struct InputField<'a> {
    value: &'a str,
    /// Cursor position in characters.
    cursor: usize,
    focused: bool,
    /// Input is shown but not editable.
    disabled: bool,
    placeholder: Option<&'a str>,
    title: &'a str,
    theme: Theme,
}

impl<'a> InputField<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            cursor: value.chars().count(),
            focused: true,
            disabled: false,
            placeholder: None,
            title: " Message ",
            theme: Theme::default(),
        }
    }

    /// Set the cursor position.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set whether the field is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Text to display, with a `|` cursor marker when editable.
    pub fn render_text(&self) -> String {
        if self.value.is_empty() {
            if let Some(placeholder) = self.placeholder {
                return placeholder.to_string();
            }
        }

        if self.focused && !self.disabled {
            let char_count = self.value.chars().count();
            let cursor_pos = self.cursor.min(char_count);
            let before: String = self.value.chars().take(cursor_pos).collect();
            let after: String = self.value.chars().skip(cursor_pos).collect();
            format!("{}|{}", before, after)
        } else {
            self.value.to_string()
        }
    }

    /// Get the style for this field.
    pub fn style(&self) -> Style {
        if self.disabled || (self.value.is_empty() && self.placeholder.is_some()) {
            self.theme.muted_style()
        } else {
            Style::default()
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused && !self.disabled {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let paragraph = Paragraph::new(Span::styled(self.render_text(), self.style())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(self.title),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(56, 8, area);
        assert_eq!(rect, Rect::new(22, 16, 56, 8));

        let small = centered_rect(56, 8, Rect::new(0, 0, 20, 5));
        assert_eq!((small.width, small.height), (20, 5));
    }

    #[test]
    fn test_input_cursor_marker() {
        assert_eq!(InputField::new("hello").render_text(), "hello|");
        assert_eq!(InputField::new("hello").cursor(2).render_text(), "he|llo");
        assert_eq!(InputField::new("hello").disabled(true).render_text(), "hello");
        assert_eq!(
            InputField::new("").placeholder("Ask me anything").render_text(),
            "Ask me anything"
        );
    }
}
