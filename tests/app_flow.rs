//! End-to-end flows through the update loop with real background tasks.
//!
//! These tests wire the same pieces the TUI runner wires (message channel,
//! timer map, mail collaborator) and drive scenarios by feeding messages,
//! with an in-memory mailer instead of the HTTP client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use folio_app::actions::{cancel_all_timers, handle_action, TimerMap};
use folio_app::handler::update;
use folio_app::message::Message;
use folio_app::state::{section, AppState, Route};
use folio_app::Settings;
use folio_core::{ContactMessage, Result};
use folio_mail::MailSender;

struct FakeMailer {
    fail: AtomicBool,
    sent: Mutex<Vec<ContactMessage>>,
}

impl FakeMailer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            fail: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MailSender for FakeMailer {
    async fn send(&self, message: &ContactMessage) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(folio_core::Error::mail_delivery("service responded with 400"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

struct Harness {
    state: AppState,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    mailer: Arc<FakeMailer>,
    timers: TimerMap,
}

impl Harness {
    fn new(settings: Settings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(64);
        Self {
            state: AppState::new(settings, folio_core::content::portfolio()),
            msg_tx,
            msg_rx,
            mailer: FakeMailer::new(),
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Feed a message through update, executing actions and follow-ups like
    /// the runner does.
    fn process(&mut self, message: Message) {
        let mut next = Some(message);
        while let Some(msg) = next {
            let result = update(&mut self.state, msg);
            if let Some(action) = result.action {
                handle_action(
                    action,
                    self.msg_tx.clone(),
                    self.mailer.clone(),
                    self.timers.clone(),
                );
            }
            next = result.message;
        }
    }

    /// Wait for the next background message and process it.
    async fn pump(&mut self) {
        let msg = tokio::time::timeout(Duration::from_secs(2), self.msg_rx.recv())
            .await
            .expect("timed out waiting for a background message")
            .expect("message channel closed");
        self.process(msg);
    }

    fn fill_contact_form(&mut self) {
        self.state.contact.name = "Ada Lovelace".into();
        self.state.contact.email = "ada@example.com".into();
        self.state.contact.subject = "Engines".into();
        self.state.contact.message = "Shall we collaborate?".into();
    }
}

fn fast_settings() -> Settings {
    let mut settings = Settings::default();
    settings.typewriter.type_delay_ms = 1;
    settings.typewriter.hold_ms = 1;
    settings
}

#[tokio::test]
async fn test_typewriter_runs_through_real_timers() {
    let mut h = Harness::new(fast_settings());

    // Initial schedule, as the runner does on startup
    h.process(Message::TypewriterTick);
    // Each tick reschedules; after a few pumps some text is on screen
    for _ in 0..4 {
        h.pump().await;
    }
    assert!(!h.state.typewriter.rendered().is_empty());

    cancel_all_timers(&h.timers);
}

#[tokio::test]
async fn test_route_push_stops_the_typewriter_and_pop_resumes_it() {
    let mut h = Harness::new(fast_settings());
    h.process(Message::TypewriterTick);
    h.pump().await;
    let typed = h.state.typewriter.rendered().to_string();
    assert!(!typed.is_empty());

    // Entering the certifications route cancels the pending timer
    h.process(Message::PushCertifications);
    assert_eq!(h.state.route(), Route::Certifications);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(h.msg_rx.try_recv().is_err(), "no tick while off the hero");
    assert_eq!(h.state.typewriter.rendered(), typed);

    // Popping back reschedules; progress continues from where it stopped
    h.process(Message::PopRoute);
    h.pump().await;
    assert!(h.state.typewriter.rendered().len() > typed.len());

    cancel_all_timers(&h.timers);
}

#[tokio::test]
async fn test_contact_delivery_success_end_to_end() {
    let mut h = Harness::new(Settings::default());
    h.fill_contact_form();

    h.process(Message::ContactSubmit);
    assert!(h.state.contact.submitting);

    // Delivery result arrives from the background task
    h.pump().await;
    assert!(!h.state.contact.submitting);
    assert!(h.state.contact.submitted);
    assert_eq!(h.state.contact.name, "");
    assert_eq!(h.mailer.sent.lock().unwrap().len(), 1);
    assert_eq!(h.mailer.sent.lock().unwrap()[0].email, "ada@example.com");

    cancel_all_timers(&h.timers);
}

#[tokio::test]
async fn test_contact_delivery_failure_keeps_the_draft() {
    let mut h = Harness::new(Settings::default());
    h.fill_contact_form();
    h.mailer.fail.store(true, Ordering::SeqCst);

    h.process(Message::ContactSubmit);
    h.pump().await;

    assert!(!h.state.contact.submitting);
    assert!(!h.state.contact.submitted);
    assert_eq!(h.state.contact.name, "Ada Lovelace");
    let alert = h.state.alert.clone().unwrap();
    assert!(alert.contains("400"), "alert was: {alert}");

    // Retry after the service recovers
    h.mailer.fail.store(false, Ordering::SeqCst);
    h.process(Message::ContactSubmit);
    h.pump().await;
    assert!(h.state.contact.submitted);
    assert!(h.state.alert.is_none());

    cancel_all_timers(&h.timers);
}

#[tokio::test]
async fn test_success_window_closes_on_its_own() {
    let mut h = Harness::new(Settings::default());
    h.fill_contact_form();

    h.process(Message::ContactSubmit);
    h.pump().await; // delivery result, schedules the success window
    assert!(h.state.contact.submitted);

    // The window timer is pending; fire it early by replacing nothing and
    // just waiting is 5s, so deliver the elapse message directly.
    h.process(Message::SubmittedWindowElapsed);
    assert!(!h.state.contact.submitted);

    cancel_all_timers(&h.timers);
}

#[tokio::test]
async fn test_section_navigation_and_inner_tabs() {
    let mut h = Harness::new(Settings::default());

    h.process(Message::SelectSectionByIndex(4));
    assert_eq!(h.state.active_section(), section::EXPERIENCE);

    h.process(Message::InnerNext);
    assert_eq!(h.state.experience_view.active_index(), 1);

    // Transition countdown runs down with frame ticks
    assert!(h.state.experience_view.in_transition());
    for _ in 0..5 {
        h.process(Message::Tick);
    }
    assert!(!h.state.experience_view.in_transition());
}

#[tokio::test]
async fn test_quit_message_sets_the_exit_flag() {
    let mut h = Harness::new(Settings::default());
    assert!(!h.state.should_quit());
    h.process(Message::Quit);
    assert!(h.state.should_quit());
}
