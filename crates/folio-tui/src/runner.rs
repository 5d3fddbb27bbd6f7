//! Main TUI runner - entry point and event loop
//!
//! Owns the application lifecycle: terminal setup, the message channel, the
//! timer map, and the draw/poll loop. Update results are applied here,
//! follow-up messages immediately and actions through
//! [`folio_app::handle_action`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use folio_app::actions::{cancel_all_timers, handle_action, TimerMap};
use folio_app::handler::{update, Timer, UpdateAction};
use folio_app::message::Message;
use folio_app::state::AppState;
use folio_app::Settings;
use folio_core::prelude::*;
use folio_mail::{MailClient, MailSender};

use super::{event, render, terminal};

/// Run the TUI application.
///
/// `start_section` preselects a section tab by id (the `--section` flag).
pub async fn run(settings: Settings, start_section: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    terminal::enable_mouse()?;

    let mut state = AppState::new(settings.clone(), folio_core::content::portfolio());
    if let Some(id) = start_section {
        state.sections.select(&id);
        // No enter animation on startup
        while state.sections.in_transition() {
            state.sections.tick();
        }
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let mailer: Arc<dyn MailSender> = Arc::new(MailClient::new(settings.mail.clone()));
    let timers: TimerMap = Arc::new(Mutex::new(HashMap::new()));

    // Kick off the hero typewriter (no-op when the phrase list is empty)
    if let Some(delay_ms) = state.typewriter.next_delay() {
        handle_action(
            UpdateAction::ScheduleTimer {
                timer: Timer::Typewriter,
                delay_ms,
            },
            msg_tx.clone(),
            mailer.clone(),
            timers.clone(),
        );
    }

    info!("entering main loop");

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &mailer, &timers);

    // Teardown: no timer may fire against a state that no longer exists
    cancel_all_timers(&timers);
    terminal::disable_mouse()?;
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    mailer: &Arc<dyn MailSender>,
    timers: &TimerMap,
) -> Result<()> {
    let tick_rate_ms = state.settings.ui.tick_rate_ms;

    while !state.should_quit() {
        // Drain messages from background tasks (timers, mail delivery)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, mailer, timers);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate_ms)? {
            process_message(state, message, &msg_tx, mailer, timers);
        }
    }

    Ok(())
}

/// Run one message through the update function, chasing follow-up messages
/// and dispatching actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    mailer: &Arc<dyn MailSender>,
    timers: &TimerMap,
) {
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), mailer.clone(), timers.clone());
        }
        next = result.message;
    }
}
