//! Contact section panel
//!
//! Contact channels on top, the four-field form below. The focused field
//! gets an accent marker while the form owns input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_app::contact::{ContactField, ContactForm};
use folio_core::types::ContactChannel;

use crate::theme::styles;

pub struct ContactPanel<'a> {
    channels: &'a [ContactChannel],
    form: &'a ContactForm,
}

impl<'a> ContactPanel<'a> {
    pub fn new(channels: &'a [ContactChannel], form: &'a ContactForm) -> Self {
        Self { channels, form }
    }

    fn field_line(&self, field: ContactField) -> Line<'static> {
        let focused = self.form.editing && self.form.focus == field;
        let marker = if focused { "▶ " } else { "  " };
        let value = self.form.value(field);
        let caret = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(marker.to_string(), styles::accent()),
            Span::styled(
                format!("{:<14}", field.label()),
                if focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(format!("{value}{caret}"), styles::text_primary()),
        ])
    }
}

impl Widget for ContactPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.form.editing).title(" Contact ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for channel in self.channels {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", channel.label), styles::accent()),
                Span::styled(channel.value.clone(), styles::text_secondary()),
            ]));
        }
        lines.push(Line::default());

        for field in ContactField::ALL {
            lines.push(self.field_line(field));
        }
        lines.push(Line::default());

        if self.form.submitting {
            lines.push(Line::from(Span::styled(
                "Sending…",
                styles::keybinding(),
            )));
        } else if self.form.submitted {
            lines.push(Line::from(Span::styled(
                "Message sent. Thanks for reaching out!",
                styles::status_green(),
            )));
        } else if self.form.editing {
            lines.push(Line::from(Span::styled(
                "Enter: send   Tab: next field   Esc: done",
                styles::keybinding(),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter: edit the form",
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
