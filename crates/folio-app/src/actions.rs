//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Everything with a side effect lands here: one-shot timers, mail delivery,
//! and the resume export. Each runs on its own tokio task and reports back
//! through the message channel; the update function stays pure.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use folio_core::ContactMessage;
use folio_mail::MailSender;

use crate::handler::{Timer, UpdateAction};
use crate::message::Message;

/// Pending one-shot timer tasks, keyed by timer id.
///
/// Scheduling under a key aborts the previous task for that key, so a
/// component can never receive a tick from a timer it already replaced or
/// tore down.
pub type TimerMap = Arc<Mutex<HashMap<Timer, JoinHandle<()>>>>;

/// Execute an action by spawning a background task.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    mailer: Arc<dyn MailSender>,
    timers: TimerMap,
) {
    match action {
        UpdateAction::ScheduleTimer { timer, delay_ms } => {
            schedule_timer(timer, delay_ms, msg_tx, &timers);
        }

        UpdateAction::CancelTimer(timer) => {
            cancel_timer(timer, &timers);
        }

        UpdateAction::SendContact(message) => {
            spawn_mail_delivery(message, msg_tx, mailer);
        }

        UpdateAction::ExportResume { source } => {
            spawn_resume_export(source);
        }
    }
}

/// Schedule a one-shot timer, replacing any pending task with the same id.
fn schedule_timer(timer: Timer, delay_ms: u64, msg_tx: mpsc::Sender<Message>, timers: &TimerMap) {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        // The receiver is gone only during shutdown; nothing to do then.
        let _ = msg_tx.send(timer.message()).await;
    });

    if let Ok(mut map) = timers.lock() {
        if let Some(previous) = map.insert(timer, handle) {
            previous.abort();
        }
    }
}

/// Cancel a pending timer, if any.
fn cancel_timer(timer: Timer, timers: &TimerMap) {
    if let Ok(mut map) = timers.lock() {
        if let Some(handle) = map.remove(&timer) {
            handle.abort();
            debug!(?timer, "cancelled pending timer");
        }
    }
}

/// Abort every pending timer. Called on teardown so no tick fires against a
/// state that no longer exists.
pub fn cancel_all_timers(timers: &TimerMap) {
    if let Ok(mut map) = timers.lock() {
        for (_, handle) in map.drain() {
            handle.abort();
        }
    }
}

fn spawn_mail_delivery(
    message: ContactMessage,
    msg_tx: mpsc::Sender<Message>,
    mailer: Arc<dyn MailSender>,
) {
    tokio::spawn(async move {
        let result = mailer
            .send(&message)
            .await
            .map_err(|e| e.to_string());
        let _ = msg_tx.send(Message::ContactSendFinished { result }).await;
    });
}

/// Copy the resume into the working directory. Fire-and-forget: failures are
/// logged, never surfaced.
fn spawn_resume_export(source: PathBuf) {
    tokio::spawn(async move {
        let file_name = source
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("resume.pdf"));
        match tokio::fs::copy(&source, &file_name).await {
            Ok(_) => info!("Exported resume to ./{}", file_name.display()),
            Err(e) => warn!("Resume export from {} failed: {e}", source.display()),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeMailer {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl MailSender for FakeMailer {
        async fn send(&self, _message: &ContactMessage) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(folio_core::Error::mail_delivery("boom"))
            } else {
                Ok(())
            }
        }
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn test_timer_fires_its_message() {
        let (tx, mut rx) = mpsc::channel(8);
        let timers: TimerMap = Arc::new(Mutex::new(HashMap::new()));
        schedule_timer(Timer::Typewriter, 1, tx, &timers);
        assert_eq!(rx.recv().await, Some(Message::TypewriterTick));
    }

    #[tokio::test]
    async fn test_reschedule_replaces_the_pending_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        let timers: TimerMap = Arc::new(Mutex::new(HashMap::new()));
        // A slow tick that must never arrive once replaced.
        schedule_timer(Timer::SubmittedWindow, 60_000, tx.clone(), &timers);
        schedule_timer(Timer::SubmittedWindow, 1, tx, &timers);
        assert_eq!(rx.recv().await, Some(Message::SubmittedWindowElapsed));
        assert_eq!(timers.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::channel(8);
        let timers: TimerMap = Arc::new(Mutex::new(HashMap::new()));
        schedule_timer(Timer::Typewriter, 10, tx, &timers);
        cancel_timer(Timer::Typewriter, &timers);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
        assert!(timers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_all_timers_drains_the_map() {
        let (tx, _rx) = mpsc::channel(8);
        let timers: TimerMap = Arc::new(Mutex::new(HashMap::new()));
        schedule_timer(Timer::Typewriter, 60_000, tx.clone(), &timers);
        schedule_timer(Timer::SubmittedWindow, 60_000, tx, &timers);
        cancel_all_timers(&timers);
        assert!(timers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mail_delivery_reports_success() {
        let (tx, mut rx) = mpsc::channel(8);
        let mailer = Arc::new(FakeMailer {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        spawn_mail_delivery(sample_message(), tx, mailer.clone());
        assert_eq!(
            rx.recv().await,
            Some(Message::ContactSendFinished { result: Ok(()) })
        );
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mail_delivery_reports_failure_as_string() {
        let (tx, mut rx) = mpsc::channel(8);
        let mailer = Arc::new(FakeMailer {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        spawn_mail_delivery(sample_message(), tx, mailer);
        match rx.recv().await {
            Some(Message::ContactSendFinished { result: Err(e) }) => {
                assert!(e.contains("boom"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
