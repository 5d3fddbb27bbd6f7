//! Status line widget
//!
//! One row at the bottom: alerts win, then the delivery banner, then
//! context-sensitive key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::state::{AppState, Route};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn line(&self) -> Line<'static> {
        if let Some(alert) = &self.state.alert {
            return Line::from(Span::styled(format!(" ✗ {alert}"), styles::status_red()));
        }
        if self.state.contact.submitting {
            return Line::from(Span::styled(" ⋯ Sending message", styles::keybinding()));
        }
        if self.state.contact.submitted {
            return Line::from(Span::styled(
                " ✓ Message sent successfully",
                styles::status_green(),
            ));
        }

        let hints = if self.state.cert_modal.is_open() {
            "Esc close"
        } else if self.state.contact.editing {
            "Enter send · Tab next field · Esc done"
        } else {
            match self.state.route() {
                Route::Certifications => "j/k move · Enter details · Esc back · q quit",
                Route::Home => "Tab/1-9 sections · j/k tabs · Enter open · d resume · q quit",
            }
        };
        Line::from(Span::styled(format!(" {hints}"), styles::text_muted()))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Paragraph::new(self.line()).render(area, buf);
    }
}
