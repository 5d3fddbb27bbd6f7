//! Color palette for the portfolio theme.
//!
//! Named colors only, so the UI degrades gracefully on 16-color terminals.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Lightbox background

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent (tabs, cursor)
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Delivery success banner
pub const STATUS_RED: Color = Color::Red; // Alerts and failures
pub const STATUS_YELLOW: Color = Color::Yellow; // Key hints, in-flight spinner

// --- Effects ---
pub const SHADOW: Color = Color::Black; // Lightbox drop shadow
