//! Screen layout definitions for the TUI
//!
//! One vertical split shared by every route: a bordered header, the content
//! panel, and a single status line at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + section tabs)
    pub header: Rect,

    /// Main content area (the active section or route page)
    pub content: Rect,

    /// Status line (alerts, key hints)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = vec![
        Constraint::Length(3), // Header (bordered, one inner row)
        Constraint::Min(5),    // Content
        Constraint::Length(1), // Status line
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}
