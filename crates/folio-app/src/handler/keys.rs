//! Key event handlers for the different UI contexts

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{section, AppState, Route};

/// Convert key events to messages based on the current UI context.
///
/// Priority order matters: an open modal captures keys first, then an
/// editing contact form, then the active route.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.cert_modal.is_open() {
        return handle_key_modal(key);
    }
    if state.contact.editing {
        return handle_key_contact_editing(key);
    }
    match state.route() {
        Route::Certifications => handle_key_certifications(key),
        Route::Home => handle_key_home(state, key),
    }
}

/// Keys while the certification lightbox is open. Only Esc/Enter close it;
/// everything else is swallowed so the page underneath does not react.
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::CloseModal),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys while the contact form owns input. Printable characters are text,
/// not shortcuts ('q' types a q).
fn handle_key_contact_editing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ContactStopEditing),
        InputKey::Enter => Some(Message::ContactSubmit),
        InputKey::Tab | InputKey::Down => Some(Message::ContactFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::ContactFocusPrev),
        InputKey::Backspace => Some(Message::ContactBackspace),
        InputKey::Char(c) => Some(Message::ContactInput(c)),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys on the full certifications listing.
fn handle_key_certifications(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('b') => Some(Message::PopRoute),
        InputKey::Down | InputKey::Char('j') => Some(Message::CertNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::CertPrev),
        InputKey::Enter => Some(Message::OpenCertModal),
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys on the home route (section navigation).
fn handle_key_home(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Section tabs
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PrevSection),
        InputKey::Char(c @ '1'..='9') => {
            Some(Message::SelectSectionByIndex(c as usize - '1' as usize))
        }

        // Inner tabs (skills categories, experience tabs, project filter)
        InputKey::Down | InputKey::Char('j') => Some(Message::InnerNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::InnerPrev),

        InputKey::Char('d') => Some(Message::ExportResume),

        // Enter activates the section under the cursor
        InputKey::Enter => match state.active_section() {
            section::CERTIFICATIONS => Some(Message::PushCertifications),
            section::CONTACT => Some(Message::ContactStartEditing),
            _ => None,
        },

        _ => None,
    }
}
