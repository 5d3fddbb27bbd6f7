//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::{AppState, Route};

use super::{handle_key, Timer, UpdateAction, UpdateResult, SUBMITTED_WINDOW_MS};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quitting = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click { column, row } => handle_click(state, column, row),

        Message::Tick => {
            state.tick_transitions();
            UpdateResult::none()
        }

        Message::TypewriterTick => {
            // Hero unmounted: the timer was cancelled, but a tick already in
            // flight may still arrive. Drop it instead of rescheduling.
            if state.route() != Route::Home {
                return UpdateResult::none();
            }
            match state.typewriter.tick() {
                Some(delay_ms) => UpdateResult::action(UpdateAction::ScheduleTimer {
                    timer: Timer::Typewriter,
                    delay_ms,
                }),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Section Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextSection => {
            state.sections.select_next();
            UpdateResult::none()
        }
        Message::PrevSection => {
            state.sections.select_prev();
            UpdateResult::none()
        }
        Message::SelectSectionByIndex(index) => {
            state.sections.select_index(index);
            UpdateResult::none()
        }

        Message::InnerNext => {
            if let Some(view) = state.inner_view_mut() {
                view.select_next();
            }
            UpdateResult::none()
        }
        Message::InnerPrev => {
            if let Some(view) = state.inner_view_mut() {
                view.select_prev();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Routing
        // ─────────────────────────────────────────────────────────
        Message::PushCertifications => {
            state.push_route(Route::Certifications);
            // The hero (and its timer) unmounts with the home route.
            UpdateResult::action(UpdateAction::CancelTimer(Timer::Typewriter))
        }

        Message::PopRoute => {
            if state.pop_route() && state.route() == Route::Home {
                // Hero remounts; resume the typewriter where it left off.
                if let Some(delay_ms) = state.typewriter.next_delay() {
                    return UpdateResult::action(UpdateAction::ScheduleTimer {
                        timer: Timer::Typewriter,
                        delay_ms,
                    });
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Certifications / Modal
        // ─────────────────────────────────────────────────────────
        Message::CertNext => {
            let last = state.content.certifications.len().saturating_sub(1);
            state.cert_cursor = (state.cert_cursor + 1).min(last);
            UpdateResult::none()
        }
        Message::CertPrev => {
            state.cert_cursor = state.cert_cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::OpenCertModal => {
            if let Some(cert) = state.content.certifications.get(state.cert_cursor) {
                state.cert_modal.open(cert.clone());
            }
            UpdateResult::none()
        }

        Message::CloseModal => {
            state.cert_modal.close();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Contact Form
        // ─────────────────────────────────────────────────────────
        Message::ContactStartEditing => {
            state.contact.editing = true;
            UpdateResult::none()
        }
        Message::ContactStopEditing => {
            state.contact.editing = false;
            UpdateResult::none()
        }
        Message::ContactFocusNext => {
            state.contact.focus_next();
            UpdateResult::none()
        }
        Message::ContactFocusPrev => {
            state.contact.focus_prev();
            UpdateResult::none()
        }
        Message::ContactInput(c) => {
            state.alert = None;
            state.contact.insert(c);
            UpdateResult::none()
        }
        Message::ContactBackspace => {
            state.contact.backspace();
            UpdateResult::none()
        }

        Message::ContactSubmit => {
            if state.contact.submitting {
                return UpdateResult::none();
            }
            match state.contact.validate() {
                Ok(message) => {
                    state.alert = None;
                    state.contact.submitting = true;
                    info!("Submitting contact message from {}", message.email);
                    UpdateResult::action(UpdateAction::SendContact(message))
                }
                Err(reason) => {
                    state.alert = Some(reason);
                    UpdateResult::none()
                }
            }
        }

        Message::ContactSendFinished { result } => {
            // Submitting always resets, success or not; the form can never
            // get stuck mid-flight.
            state.contact.submitting = false;
            match result {
                Ok(()) => {
                    state.contact.submitted = true;
                    state.contact.clear_fields();
                    state.alert = None;
                    UpdateResult::action(UpdateAction::ScheduleTimer {
                        timer: Timer::SubmittedWindow,
                        delay_ms: SUBMITTED_WINDOW_MS,
                    })
                }
                Err(reason) => {
                    // Fields stay as typed so the user can retry.
                    warn!("Contact delivery failed: {reason}");
                    state.alert = Some(format!("Sending failed: {reason}"));
                    UpdateResult::none()
                }
            }
        }

        Message::SubmittedWindowElapsed => {
            state.contact.submitted = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Misc
        // ─────────────────────────────────────────────────────────
        Message::ExportResume => match state.settings.resume.path.clone() {
            Some(source) => UpdateResult::action(UpdateAction::ExportResume { source }),
            None => {
                debug!("Resume export requested but no [resume] path configured");
                UpdateResult::none()
            }
        },
    }
}

/// Route a mouse click. Only the modal cares: a backdrop click closes it, a
/// click inside the content region must not.
fn handle_click(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    if state.cert_modal.is_backdrop_click(column, row) {
        return UpdateResult::message(Message::CloseModal);
    }
    UpdateResult::none()
}
