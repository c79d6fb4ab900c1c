//! Event types for communication between the assistant backend and UI.

use medcare_core::{AlertOutcome, Message};

/// Events sent from the backend to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// A message was appended to the session's conversation.
    MessageAppended(Message),

    /// The assistant started preparing a reply.
    ThinkingStarted,

    /// The assistant finished replying.
    ThinkingFinished,

    /// An emergency reply triggered the contact alert.
    EmergencyAlert(AlertOutcome),
}

/// Commands sent from UI to the backend.
#[derive(Debug)]
pub enum BackendCommand {
    /// Send user text to the assistant.
    Submit(String),

    /// Quit the application.
    Quit,
}
