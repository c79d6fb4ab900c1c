//! Session-scoped assistant state.
//!
//! An [`AssistantSession`] owns everything one interactive session needs:
//! the user's display name, the rule table, the conversation and the
//! emergency notifier. Nothing is shared between sessions.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chat::Message;
use crate::classifier::{Intent, RuleTable};
use crate::conversation::Conversation;
use crate::notify::{EmergencyNotifier, NoopNotifier};
use crate::responder::ResponseGenerator;

/// Default days between emotional check-ins.
pub const MOOD_CHECK_INTERVAL_DAYS: i64 = 7;

/// Result of alerting emergency contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum AlertOutcome {
    Sent,
    Failed(String),
}

/// The assistant's answer to one user submission.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub intent: Intent,
    pub message: Message,
    /// Set only for emergency responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<AlertOutcome>,
}

/// Returns true when a mood check-in should be offered.
///
/// An interval reaching past the representable calendar is never due.
pub fn mood_check_due(
    last_check: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    interval: Duration,
) -> bool {
    match last_check {
        None => true,
        Some(last) => now
            .checked_sub_signed(interval)
            .is_some_and(|threshold| last < threshold),
    }
}

/// Interaction state for a single user session.
pub struct AssistantSession {
    user_name: String,
    rules: RuleTable,
    generator: ResponseGenerator,
    conversation: Conversation,
    rng: StdRng,
    notifier: Box<dyn EmergencyNotifier>,
    started: bool,
}

impl AssistantSession {
    /// Create a session with the default rule table and no-op notifier.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            rules: RuleTable::default(),
            generator: ResponseGenerator::new(),
            conversation: Conversation::new(),
            rng: StdRng::from_entropy(),
            notifier: Box::new(NoopNotifier),
            started: false,
        }
    }

    /// Builder method to replace the rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Builder method to set the emergency notifier.
    pub fn with_notifier(mut self, notifier: impl EmergencyNotifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Builder method to seed greeting selection (useful for testing).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Append the opening greeting for the given local hour.
    ///
    /// Returns `None` if the session was already started.
    pub fn start(&mut self, hour: u32) -> Option<&Message> {
        if self.started {
            return None;
        }
        self.started = true;

        info!(user = %self.user_name, hour = hour, "Starting assistant session");
        let greeting = self.generator.opening_greeting(&self.user_name, hour);
        self.conversation.append(Message::assistant(
            greeting.text,
            greeting.category,
            greeting.emotion,
        ));
        self.conversation.last()
    }

    /// Record what the user typed or said.
    ///
    /// Empty or whitespace-only input is ignored and leaves the session
    /// untouched.
    pub fn accept_user_input(&mut self, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            debug!("Ignoring empty input");
            return None;
        }

        let message = Message::user(text);
        self.conversation.append(message.clone());
        Some(message)
    }

    /// Classify `text`, generate the response and append it.
    pub fn reply_to(&mut self, text: &str) -> Reply {
        let intent = self.rules.classify(text);
        let response = self.generator.respond(intent, &self.user_name, &mut self.rng);

        let alert = if response.alert {
            warn!(user = %self.user_name, "Emergency detected, notifying contacts");
            Some(match self.notifier.notify(&self.user_name) {
                Ok(()) => AlertOutcome::Sent,
                Err(e) => {
                    warn!(error = %e, "Failed to notify emergency contacts");
                    AlertOutcome::Failed(e.to_string())
                }
            })
        } else {
            None
        };

        let message = Message::assistant(response.text, response.category, response.emotion);
        self.conversation.append(message.clone());

        Reply {
            intent,
            message,
            alert,
        }
    }

    /// Handle one submission round-trip: the user message, then the reply.
    pub fn submit(&mut self, text: &str) -> Option<Reply> {
        self.accept_user_input(text)?;
        Some(self.reply_to(text))
    }

    /// Append the weekly mood check-in if one is due.
    pub fn check_in_mood(
        &mut self,
        last_check: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        interval: Duration,
    ) -> Option<Message> {
        if !mood_check_due(last_check, now, interval) {
            return None;
        }

        let check_in = self.generator.mood_check_in();
        let message = Message::assistant(check_in.text, check_in.category, check_in.emotion);
        self.conversation.append(message.clone());
        Some(message)
    }
}
