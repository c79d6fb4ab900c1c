//! Header widget for TUI applications.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// Assistant availability shown next to the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub label: String,
    /// Busy statuses are drawn in the warning color.
    pub busy: bool,
}

impl StatusIndicator {
    pub fn ready(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy: false,
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy: true,
        }
    }
}

/// Labelled value on the right of the header, e.g. `Today: 50%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStat {
    pub label: String,
    pub value: String,
}

impl HeaderStat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Header widget with title, subtitle, status and stats.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    status: Option<StatusIndicator>,
    /// Stats to display on the right side.
    stats: Vec<HeaderStat>,
    theme: Theme,
}

impl<'a> Header<'a> {
    /// Create a new header with a title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            subtitle: None,
            status: None,
            stats: Vec::new(),
            theme: Theme::default(),
        }
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Set the status indicator.
    pub fn status(mut self, status: StatusIndicator) -> Self {
        self.status = Some(status);
        self
    }

    /// Add a stat to display.
    pub fn stat(mut self, stat: HeaderStat) -> Self {
        self.stats.push(stat);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the header.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        // Split into left (title) and right (stats)
        let has_stats = !self.stats.is_empty();
        let constraints = if has_stats {
            vec![Constraint::Min(30), Constraint::Length(50)]
        } else {
            vec![Constraint::Min(0)]
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        let mut title_spans = vec![Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(status) = &self.status {
            title_spans.push(Span::styled(
                format!("[{}]", status.label),
                if status.busy {
                    self.theme.warning_style()
                } else {
                    self.theme.success_style()
                },
            ));
            title_spans.push(Span::raw(" "));
        }

        let subtitle = Line::from(Span::styled(
            format!(" {}", self.subtitle.unwrap_or_default()),
            self.theme.muted_style(),
        ));
        let title_widget = Paragraph::new(subtitle)
            .block(Block::default().title(title_spans).borders(Borders::ALL));
        frame.render_widget(title_widget, chunks[0]);

        if has_stats && chunks.len() > 1 {
            let mut stat_spans = vec![Span::raw(" ")];

            for (i, stat) in self.stats.iter().enumerate() {
                if i > 0 {
                    stat_spans.push(Span::raw(" | "));
                }
                stat_spans.push(Span::raw(format!("{}: ", stat.label)));
                stat_spans.push(Span::styled(&stat.value, self.theme.focused_border()));
            }

            let stats_widget = Paragraph::new(Line::from(stat_spans))
                .block(Block::default().borders(Borders::ALL));

            frame.render_widget(stats_widget, chunks[1]);
        }
    }
}
