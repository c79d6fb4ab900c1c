//! Main render function for the TUI.

use chrono::{Local, NaiveTime};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use medcare_core::medicine::format_time_left;
use medcare_core::{DailySchedule, QUICK_ACTIONS};
use medcare_tui_components::{
    truncate, ActionsWidget, AlertDialog, ChatWidget, Footer, Header, HeaderStat, InputField,
    StatusIndicator, Theme,
};

use crate::state::UiState;

const ASSISTANT_NAME: &str = "MedCare";
const PLACEHOLDER: &str =
    "Ask me anything about your health, medicines, or how you're feeling...";
const HELP: &str = "Enter send | Alt+1-6 quick action | F2 voice | PgUp/PgDn scroll | Esc quit";
const SIDE_PANEL_WIDTH: u16 = 40;

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &UiState) {
    let theme = Theme::default();

    let [header_area, body_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area, state, theme);

    let [chat_area, side_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDE_PANEL_WIDTH)])
            .areas(body_area);

    ChatWidget::new(&state.messages)
        .assistant_name(ASSISTANT_NAME)
        .thinking(state.thinking.then_some("thinking..."))
        .scroll_back(state.scroll_back)
        .focused(!state.thinking)
        .theme(theme)
        .render(frame, chat_area);

    render_side_panel(frame, side_area, state, theme);

    InputField::new(&state.input)
        .cursor(state.cursor)
        .focused(true)
        .disabled(state.thinking)
        .placeholder(PLACEHOLDER)
        .title(" Message ")
        .theme(theme)
        .render(frame, input_area);

    let status = match (&state.notice, state.thinking) {
        (Some(notice), _) => notice.as_str(),
        (None, true) => "Thinking...",
        (None, false) => "Ready",
    };
    Footer::new(status, HELP)
        .alert(state.notice.is_some())
        .theme(theme)
        .render(frame, footer_area);

    if let Some(alert) = &state.alert {
        AlertDialog::new("Emergency", alert)
            .theme(theme)
            .render(frame);
    }
}

/// Render the header with the daily medicine stats.
fn render_header(frame: &mut Frame, area: Rect, state: &UiState, theme: Theme) {
    let subtitle = format!("Your health companion, {}", state.user_name);
    let status = if state.thinking {
        StatusIndicator::busy("thinking")
    } else {
        StatusIndicator::ready("online")
    };

    Header::new("MedCare")
        .subtitle(&subtitle)
        .status(status)
        .stat(HeaderStat::new(
            "Today",
            format!("{}%", state.schedule.completion_rate()),
        ))
        .stat(HeaderStat::new(
            "Next dose",
            next_dose_label(&state.schedule, Local::now().time()),
        ))
        .theme(theme)
        .render(frame, area);
}

/// Render quick actions above today's medicine list.
fn render_side_panel(frame: &mut Frame, area: Rect, state: &UiState, theme: Theme) {
    let actions_height = QUICK_ACTIONS.len() as u16 + 2;
    let [actions_area, medicines_area] =
        Layout::vertical([Constraint::Length(actions_height), Constraint::Fill(1)]).areas(area);

    ActionsWidget::new(&QUICK_ACTIONS)
        .key_prefix("Alt+")
        .theme(theme)
        .render(frame, actions_area);

    let width = medicines_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .schedule
        .doses()
        .iter()
        .map(|dose| {
            let (mark, style) = if dose.taken {
                ("✓", theme.success_style())
            } else {
                ("○", theme.muted_style())
            };
            let label = format!("{} {} ({})", dose.time.format("%H:%M"), dose.name, dose.dosage);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", mark), style),
                Span::raw(truncate(&label, width.saturating_sub(2))),
            ]))
        })
        .collect();

    let title = format!(
        " Medicines {}/{} ",
        state.schedule.taken_count(),
        state.schedule.doses().len()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.unfocused_border())
            .title(title),
    );

    frame.render_widget(list, medicines_area);
}

fn next_dose_label(schedule: &DailySchedule, now: NaiveTime) -> String {
    match schedule.next_due(now) {
        Some((dose, left)) => format!("{} in {}", dose.name, format_time_left(left)),
        None => "all done".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_dose_label() {
        let schedule = DailySchedule::sample();
        let afternoon = NaiveTime::from_hms_opt(15, 45, 0).unwrap();
        assert_eq!(next_dose_label(&schedule, afternoon), "Multivitamin in 2h 15m");

        let night = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        assert_eq!(next_dose_label(&schedule, night), "all done");
    }
}
