//! Application state and main event loop.

use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use medcare_core::{AlertOutcome, DailySchedule, SpeechRecognizer, QUICK_ACTIONS};

use crate::event::{BackendCommand, UiEvent};
use crate::state::{UiState, ALERT_SENT};
use crate::ui;

/// Lines moved per PageUp/PageDown.
const SCROLL_STEP: usize = 5;

/// Main application with UI state and channel handles.
pub struct App {
    /// Current UI state snapshot for rendering.
    state: UiState,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,

    /// Voice input source for F2.
    recognizer: Box<dyn SpeechRecognizer>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(
        user_name: &str,
        ui_rx: mpsc::Receiver<UiEvent>,
        cmd_tx: mpsc::Sender<BackendCommand>,
        recognizer: Box<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            state: UiState::new(user_name, DailySchedule::sample()),
            ui_rx,
            cmd_tx,
            recognizer,
        }
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Drawing the UI
    /// - Processing keyboard input
    /// - Receiving updates from the backend
    ///
    /// The backend is told to quit however the loop ends.
    pub fn run(&mut self, terminal: DefaultTerminal) -> std::io::Result<()> {
        let result = self.event_loop(terminal);
        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);
        result
    }

    fn event_loop(&mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }

            if self.state.should_quit {
                return Ok(());
            }
        }
    }

    /// Apply an event from the backend to the UI state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::MessageAppended(message) => {
                self.state.push_message(&message);
            }
            UiEvent::ThinkingStarted => {
                self.state.thinking = true;
            }
            UiEvent::ThinkingFinished => {
                self.state.thinking = false;
            }
            UiEvent::EmergencyAlert(AlertOutcome::Sent) => {
                self.state.alert = Some(ALERT_SENT.to_string());
            }
            UiEvent::EmergencyAlert(AlertOutcome::Failed(reason)) => {
                self.state.alert = Some(format!(
                    "Could not reach your emergency contacts: {}. Please call 911 directly.",
                    reason
                ));
            }
        }
    }

    /// Handle a key press.
    fn handle_key(&mut self, key: KeyEvent) {
        // The alert dialog is modal
        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.alert = None;
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => self.state.should_quit = true,
            KeyCode::Char('c') if ctrl => self.state.should_quit = true,

            KeyCode::Char(c @ '1'..='6') if alt => {
                let index = c as usize - '1' as usize;
                self.send(QUICK_ACTIONS[index].to_string());
            }

            KeyCode::Enter => {
                if self.state.thinking {
                    return;
                }
                if let Some(text) = self.state.take_input() {
                    self.send(text);
                }
            }

            KeyCode::F(2) => self.listen(),

            KeyCode::PageUp => self.state.scroll_up(SCROLL_STEP),
            KeyCode::PageDown => self.state.scroll_down(SCROLL_STEP),

            KeyCode::Char(c) if !self.state.thinking && !ctrl && !alt => {
                self.state.notice = None;
                self.state.insert_char(c);
            }
            KeyCode::Backspace if !self.state.thinking => self.state.backspace(),
            KeyCode::Delete if !self.state.thinking => self.state.delete(),
            KeyCode::Left => self.state.move_left(),
            KeyCode::Right => self.state.move_right(),
            KeyCode::Home => self.state.move_home(),
            KeyCode::End => self.state.move_end(),

            _ => {}
        }
    }

    /// Send text to the assistant unless a reply is pending.
    fn send(&mut self, text: String) {
        if self.state.thinking {
            return;
        }
        debug!(len = text.len(), "Submitting input");
        self.state.notice = None;
        if let Err(e) = self.cmd_tx.try_send(BackendCommand::Submit(text)) {
            warn!(error = %e, "Failed to reach assistant backend");
            self.state.notice = Some("Assistant is unavailable".to_string());
        }
    }

    /// Fill the input with a voice transcript, or show why that failed.
    fn listen(&mut self) {
        if self.state.thinking {
            return;
        }
        match self.recognizer.listen() {
            Ok(transcript) => {
                self.state.notice = None;
                self.state.set_input(transcript);
            }
            Err(e) => {
                debug!(error = %e, "Voice input unavailable");
                self.state.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcare_core::{Category, Emotion, Message, SpeechError, UnsupportedRecognizer};

    struct FixedRecognizer(&'static str);

    impl SpeechRecognizer for FixedRecognizer {
        fn listen(&mut self) -> Result<String, SpeechError> {
            Ok(self.0.to_string())
        }
    }

    fn app_with(
        recognizer: Box<dyn SpeechRecognizer>,
    ) -> (App, mpsc::Sender<UiEvent>, mpsc::Receiver<BackendCommand>) {
        let (ui_tx, ui_rx) = mpsc::channel(16);
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        (App::new("John", ui_rx, cmd_tx, recognizer), ui_tx, cmd_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_submits_input() {
        let (mut app, _ui_tx, mut cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        type_text(&mut app, "I have a headache");
        press(&mut app, KeyCode::Enter);

        match cmd_rx.try_recv() {
            Ok(BackendCommand::Submit(text)) => assert_eq!(text, "I have a headache"),
            other => panic!("expected submit, got {:?}", other),
        }
        assert!(app.state.input.is_empty());
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let (mut app, _ui_tx, mut cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_input_locked_while_thinking() {
        let (mut app, _ui_tx, mut cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        type_text(&mut app, "hello");
        app.apply_event(UiEvent::ThinkingStarted);

        type_text(&mut app, "!!");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.input, "hello");
        assert!(cmd_rx.try_recv().is_err());

        app.apply_event(UiEvent::ThinkingFinished);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::Submit(_))));
    }

    #[test]
    fn test_quick_action_shortcut() {
        let (mut app, _ui_tx, mut cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        app.handle_key(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT));

        match cmd_rx.try_recv() {
            Ok(BackendCommand::Submit(text)) => assert_eq!(text, QUICK_ACTIONS[4]),
            other => panic!("expected submit, got {:?}", other),
        }
    }

    #[test]
    fn test_voice_input() {
        let (mut app, _ui_tx, _cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        press(&mut app, KeyCode::F(2));
        assert_eq!(
            app.state.notice.as_deref(),
            Some("Voice recognition is not supported on this terminal.")
        );

        let (mut app, _ui_tx, _cmd_rx) = app_with(Box::new(FixedRecognizer("chest pain")));
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.state.input, "chest pain");
        assert!(app.state.notice.is_none());
    }

    #[test]
    fn test_emergency_alert_is_modal() {
        let (mut app, _ui_tx, mut cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        app.apply_event(UiEvent::MessageAppended(Message::assistant(
            "help is on the way",
            Category::Emergency,
            Emotion::Urgent,
        )));
        app.apply_event(UiEvent::EmergencyAlert(AlertOutcome::Sent));
        assert_eq!(app.state.alert.as_deref(), Some(ALERT_SENT));

        // Keys other than Enter/Esc are swallowed
        type_text(&mut app, "x");
        assert!(app.state.input.is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(app.state.alert.is_none());
        assert!(!app.state.should_quit);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_dropping_app_disconnects_backend() {
        let (app, _ui_tx, mut cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        drop(app);
        assert_eq!(
            cmd_rx.try_recv().unwrap_err(),
            mpsc::error::TryRecvError::Disconnected
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (mut app, _ui_tx, _cmd_rx) = app_with(Box::new(UnsupportedRecognizer));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state.should_quit);
    }
}
