//! Side-effect seams for the assistant: emergency alerts and voice input.

use crate::error::{CoreError, SpeechError};

/// Alerts a user's emergency contacts.
pub trait EmergencyNotifier: Send {
    fn notify(&self, user_name: &str) -> Result<(), CoreError>;
}

/// Notifier that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl EmergencyNotifier for NoopNotifier {
    fn notify(&self, _user_name: &str) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Speech-to-text collaborator feeding the input field.
pub trait SpeechRecognizer: Send {
    /// Listen for a single utterance and return its transcript.
    fn listen(&mut self) -> Result<String, SpeechError>;
}

/// Recognizer for environments without speech support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn listen(&mut self) -> Result<String, SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

/// Canned prompts offered as one-key shortcuts.
pub const QUICK_ACTIONS: [&str; 6] = [
    "How am I doing with my medicines?",
    "I'm feeling unwell today",
    "Give me personalized health tips",
    "I feel stressed and anxious",
    "What should I do for chest pain?",
    "Analyze my health patterns",
];
