//! folio-tui - Terminal UI for termfolio
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! event loop: terminal events become [`folio_app::Message`]s, the update
//! function from folio-app processes them, and [`render::view`] draws the
//! resulting state every frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
