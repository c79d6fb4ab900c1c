//! Colors and styles shared by all widgets.

use ratatui::style::{Color, Modifier, Style};

/// Visual treatment of an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Suggestion,
    Warning,
    Info,
    Emergency,
}

/// Color palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub user: Color,
    pub assistant: Color,
    pub suggestion: Color,
    pub warning: Color,
    pub emergency: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            user: Color::Blue,
            assistant: Color::White,
            suggestion: Color::Green,
            warning: Color::Yellow,
            emergency: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn user_style(&self) -> Style {
        Style::default().fg(self.user)
    }

    pub fn assistant_style(&self) -> Style {
        Style::default().fg(self.assistant)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.emergency)
    }

    /// Style for an assistant message body of the given tone.
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Suggestion => Style::default().fg(self.suggestion),
            Tone::Warning => Style::default().fg(self.warning),
            Tone::Info => self.assistant_style(),
            Tone::Emergency => Style::default()
                .fg(self.emergency)
                .add_modifier(Modifier::BOLD),
        }
    }
}
