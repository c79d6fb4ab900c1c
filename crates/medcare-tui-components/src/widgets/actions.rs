//! Numbered list of shortcut prompts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::truncate;

/// Shortcut list, e.g. `Alt+1  How am I doing with my medicines?`.
#[derive(Debug, Clone)]
pub struct ActionsWidget<'a> {
    actions: &'a [&'a str],
    key_prefix: &'a str,
    title: &'a str,
    theme: Theme,
}

impl<'a> ActionsWidget<'a> {
    pub fn new(actions: &'a [&'a str]) -> Self {
        Self {
            actions,
            key_prefix: "",
            title: " Quick actions ",
            theme: Theme::default(),
        }
    }

    /// Text shown before each action's number.
    pub fn key_prefix(mut self, prefix: &'a str) -> Self {
        self.key_prefix = prefix;
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

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let key = format!("{}{} ", self.key_prefix, i + 1);
                let room = width.saturating_sub(key.chars().count());
                ListItem::new(Line::from(vec![
                    Span::styled(key, self.theme.focused_border()),
                    Span::raw(truncate(action, room)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(self.title),
        );

        frame.render_widget(list, area);
    }
}
