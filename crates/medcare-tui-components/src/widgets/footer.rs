//! Footer widget for TUI applications.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// One-line footer: a status message followed by key help.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    status: &'a str,
    help: &'a str,
    /// Render the status as a warning rather than a normal message.
    alert: bool,
    theme: Theme,
}

impl<'a> Footer<'a> {
    pub fn new(status: &'a str, help: &'a str) -> Self {
        Self {
            status,
            help,
            alert: false,
            theme: Theme::default(),
        }
    }

    pub fn alert(mut self, alert: bool) -> Self {
        self.alert = alert;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let status_style = if self.alert {
            self.theme.warning_style()
        } else {
            self.theme.success_style()
        };

        let line = Line::from(vec![
            Span::styled(format!(" {}", self.status), status_style),
            Span::raw(" | "),
            Span::styled(self.help, self.theme.muted_style()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
