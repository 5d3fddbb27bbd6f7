//! Handler module - TEA update function and key routing
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-message routing by UI context

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use folio_core::ContactMessage;

use crate::message::Message;

// Re-export main entry points
pub use keys::handle_key;
pub use update::update;

/// How long the "message sent" banner stays up after a delivery.
pub const SUBMITTED_WINDOW_MS: u64 = 5000;

/// Identity of a scheduled one-shot timer.
///
/// Scheduling a timer cancels any pending task with the same id, so at most
/// one tick per timer is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Next rotating-text tick.
    Typewriter,
    /// End of the contact form's success window.
    SubmittedWindow,
}

impl Timer {
    /// Message delivered when the timer fires.
    pub fn message(&self) -> Message {
        match self {
            Timer::Typewriter => Message::TypewriterTick,
            Timer::SubmittedWindow => Message::SubmittedWindowElapsed,
        }
    }
}

/// Side effects requested by the update function, performed by the event
/// loop via [`crate::actions::handle_action`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Schedule (or reschedule) a one-shot timer.
    ScheduleTimer { timer: Timer, delay_ms: u64 },

    /// Cancel a pending timer, if any.
    CancelTimer(Timer),

    /// Deliver a contact message through the mail collaborator.
    SendContact(ContactMessage),

    /// Copy the resume into the working directory, fire-and-forget.
    ExportResume { source: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
