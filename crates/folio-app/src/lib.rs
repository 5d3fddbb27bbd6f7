//! folio-app - Application state and orchestration for termfolio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, a pure [`handler::update`] function over
//! [`AppState`], and an [`actions::handle_action`] dispatcher that performs
//! the few side effects (timers, mail delivery, resume export) on background
//! tasks.
//!
//! The three view-state components live here, independent of any terminal
//! library:
//! - [`typewriter::Typewriter`] - the rotating-text engine
//! - [`view_select::SelectableView`] - pick-one-of-N view state
//! - [`modal::ModalController`] - exclusive open/close overlay state

pub mod actions;
pub mod config;
pub mod contact;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod modal;
pub mod state;
pub mod typewriter;
pub mod view_select;

// Re-export primary types
pub use actions::{handle_action, TimerMap};
pub use config::{load_settings, Settings};
pub use contact::{ContactField, ContactForm};
pub use handler::{Timer, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use modal::{ModalController, Region};
pub use state::{AppState, Route};
pub use typewriter::Typewriter;
pub use view_select::{SelectableView, ViewOption};
