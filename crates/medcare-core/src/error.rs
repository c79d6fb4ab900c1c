//! Core domain errors.

use thiserror::Error;

/// Core domain errors for MedCare.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rule table violates the classifier's ordering rules.
    #[error("Invalid rule table: {0}")]
    InvalidRuleTable(String),

    /// Dose not found in the schedule.
    #[error("Dose not found: {0}")]
    DoseNotFound(String),

    /// Emergency contacts could not be notified.
    #[error("Notification failed: {0}")]
    Notification(String),
}

/// Errors from a voice-input collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// No speech recognition is available in this environment.
    #[error("Voice recognition is not supported on this terminal.")]
    Unsupported,

    /// Speech was captured but nothing was recognized.
    #[error("Voice recognition error. Please try again.")]
    NoMatch,

    /// The recognizer failed for another reason.
    #[error("Voice recognition failed: {0}")]
    Failed(String),
}
