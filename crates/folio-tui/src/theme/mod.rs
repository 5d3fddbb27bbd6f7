//! Centralized theme system for the portfolio TUI.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions

pub mod palette;
pub mod styles;
