//! Semantic style builders for the portfolio theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - used for the selected tab or list row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn panel_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
