//! MedCare Core Domain Types
//!
//! This crate contains the health companion's domain logic with no
//! dependencies on:
//! - Terminal rendering
//! - Async runtimes
//! - Persistence
//!
//! The assistant is a keyword rule table ([`classifier`]) feeding canned
//! templates ([`responder`]), with each exchange appended to a session's
//! [`conversation`]. [`AssistantSession`] ties them together.

pub mod chat;
pub mod classifier;
pub mod conversation;
pub mod error;
pub mod ids;
pub mod medicine;
pub mod notify;
pub mod responder;
pub mod session;
pub mod tools;

// Re-export commonly used types
pub use chat::{Category, Emotion, Message, Sender};
pub use classifier::{Intent, Rule, RuleTable};
pub use conversation::Conversation;
pub use error::{CoreError, SpeechError};
pub use ids::{DoseId, MessageId};
pub use medicine::{DailySchedule, Dose};
pub use notify::{
    EmergencyNotifier, NoopNotifier, SpeechRecognizer, UnsupportedRecognizer, QUICK_ACTIONS,
};
pub use responder::{Response, ResponseGenerator};
pub use session::{AlertOutcome, AssistantSession, Reply, MOOD_CHECK_INTERVAL_DAYS};
