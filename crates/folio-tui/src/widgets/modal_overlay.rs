//! Shared overlay utilities for the certification lightbox.
//!
//! Centering, backdrop dimming, and the drop shadow live here so the render
//! function only has to compose them.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area so the lightbox reads as the only opaque
/// layer on screen.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect before drawing modal content over it.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
