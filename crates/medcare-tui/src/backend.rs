//! Background task that owns the assistant session.

use chrono::{Local, Timelike, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use medcare_core::{AssistantSession, CoreError, EmergencyNotifier};

use crate::config::Config;
use crate::event::{BackendCommand, UiEvent};

/// Notifier used by the terminal companion.
///
/// There is no contact directory to reach, so the alert is recorded in the
/// log and surfaced to the user by the UI.
pub struct LogNotifier;

impl EmergencyNotifier for LogNotifier {
    fn notify(&self, user_name: &str) -> Result<(), CoreError> {
        warn!(user = %user_name, "Emergency protocols activated");
        Ok(())
    }
}

/// Run the assistant loop.
///
/// This function runs in a separate thread with its own tokio runtime.
/// It greets the user, optionally schedules the mood check-in, and answers
/// each submission after the configured thinking delay, sending every
/// appended message to the UI thread via `ui_tx`.
pub async fn run_backend(
    mut session: AssistantSession,
    config: Config,
    ui_tx: mpsc::Sender<UiEvent>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
) {
    let greeting = session.start(Local::now().hour()).cloned();
    if let Some(greeting) = greeting {
        let _ = ui_tx.send(UiEvent::MessageAppended(greeting)).await;
    }

    let mood_timer = tokio::time::sleep(config.mood_check_delay);
    tokio::pin!(mood_timer);
    let mut mood_pending = config.mood_check;

    loop {
        tokio::select! {
            _ = &mut mood_timer, if mood_pending => {
                mood_pending = false;
                let check_in = session.check_in_mood(
                    config.last_mood_check,
                    Utc::now(),
                    config.mood_check_interval,
                );
                if let Some(message) = check_in {
                    debug!("Sending mood check-in");
                    let _ = ui_tx.send(UiEvent::MessageAppended(message)).await;
                }
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(BackendCommand::Submit(text)) => {
                        handle_submit(&mut session, &config, &ui_tx, &text).await;
                    }
                    Some(BackendCommand::Quit) | None => {
                        info!("Shutting down assistant backend");
                        break;
                    }
                }
            }
        }
    }
}

async fn handle_submit(
    session: &mut AssistantSession,
    config: &Config,
    ui_tx: &mpsc::Sender<UiEvent>,
    text: &str,
) {
    let Some(user_message) = session.accept_user_input(text) else {
        return;
    };
    let _ = ui_tx.send(UiEvent::MessageAppended(user_message)).await;
    let _ = ui_tx.send(UiEvent::ThinkingStarted).await;

    tokio::time::sleep(config.thinking_delay).await;

    let reply = session.reply_to(text);
    let category = reply.message.category().map(|c| c.as_str()).unwrap_or("none");
    debug!(intent = %reply.intent, category = category, "Replying");

    let _ = ui_tx.send(UiEvent::MessageAppended(reply.message)).await;
    let _ = ui_tx.send(UiEvent::ThinkingFinished).await;

    if let Some(outcome) = reply.alert {
        let _ = ui_tx.send(UiEvent::EmergencyAlert(outcome)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use medcare_core::{AlertOutcome, Category, Sender};

    fn quiet_config() -> Config {
        Config {
            thinking_delay: Duration::ZERO,
            mood_check: false,
            ..Config::default()
        }
    }

    async fn next(ui_rx: &mut mpsc::Receiver<UiEvent>) -> UiEvent {
        tokio::time::timeout(Duration::from_secs(5), ui_rx.recv())
            .await
            .expect("backend stalled")
            .expect("backend closed")
    }

    #[tokio::test]
    async fn test_greets_then_answers_emergency() {
        let (ui_tx, mut ui_rx) = mpsc::channel(32);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let session = AssistantSession::new("John").with_seed(1);
        let handle = tokio::spawn(run_backend(session, quiet_config(), ui_tx, cmd_rx));

        match next(&mut ui_rx).await {
            UiEvent::MessageAppended(m) => assert_eq!(m.sender(), Sender::Assistant),
            other => panic!("expected greeting, got {:?}", other),
        }

        cmd_tx
            .send(BackendCommand::Submit("chest pain".to_string()))
            .await
            .unwrap();

        match next(&mut ui_rx).await {
            UiEvent::MessageAppended(m) => assert_eq!(m.text(), "chest pain"),
            other => panic!("expected user message, got {:?}", other),
        }
        assert!(matches!(next(&mut ui_rx).await, UiEvent::ThinkingStarted));
        match next(&mut ui_rx).await {
            UiEvent::MessageAppended(m) => assert_eq!(m.category(), Some(Category::Emergency)),
            other => panic!("expected reply, got {:?}", other),
        }
        assert!(matches!(next(&mut ui_rx).await, UiEvent::ThinkingFinished));
        assert!(matches!(
            next(&mut ui_rx).await,
            UiEvent::EmergencyAlert(AlertOutcome::Sent)
        ));

        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_submission_is_ignored() {
        let (ui_tx, mut ui_rx) = mpsc::channel(32);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_backend(
            AssistantSession::new("John"),
            quiet_config(),
            ui_tx,
            cmd_rx,
        ));

        // Greeting
        next(&mut ui_rx).await;

        cmd_tx.send(BackendCommand::Submit("   ".to_string())).await.unwrap();
        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();

        // The sender is dropped with the backend; nothing else was sent.
        assert!(ui_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stops_when_ui_goes_away() {
        let (ui_tx, mut ui_rx) = mpsc::channel(32);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_backend(
            AssistantSession::new("John"),
            quiet_config(),
            ui_tx,
            cmd_rx,
        ));

        next(&mut ui_rx).await;

        // No Quit is sent; closing the channel must be enough
        drop(cmd_tx);
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("backend did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_mood_check_in_after_delay() {
        let (ui_tx, mut ui_rx) = mpsc::channel(32);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let config = Config {
            mood_check: true,
            mood_check_delay: Duration::from_millis(10),
            ..quiet_config()
        };
        let handle = tokio::spawn(run_backend(
            AssistantSession::new("John"),
            config,
            ui_tx,
            cmd_rx,
        ));

        next(&mut ui_rx).await;
        match next(&mut ui_rx).await {
            UiEvent::MessageAppended(m) => {
                assert_eq!(m.category(), Some(Category::Suggestion));
                assert!(m.text().contains("check in with you weekly"));
            }
            other => panic!("expected mood check-in, got {:?}", other),
        }

        cmd_tx.send(BackendCommand::Quit).await.unwrap();
        handle.await.unwrap();
    }
}
