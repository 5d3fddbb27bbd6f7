//! Certification widgets
//!
//! Three views of the same records: the home-route preview (first three),
//! the full listing with a cursor, and the detail lightbox.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::types::Certification;

use crate::theme::styles;

/// Home-route preview: the first few certifications plus a hint to the full
/// listing.
pub struct CertificationPreview<'a> {
    preview: &'a [Certification],
    total: usize,
}

impl<'a> CertificationPreview<'a> {
    pub fn new(preview: &'a [Certification], total: usize) -> Self {
        Self { preview, total }
    }
}

impl Widget for CertificationPreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Certifications ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for cert in self.preview {
            lines.push(Line::from(vec![
                Span::styled("◆ ", styles::accent()),
                Span::styled(cert.title.clone(), styles::text_primary()),
                Span::styled(format!("  {}", cert.organization), styles::text_muted()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Enter: view all {} certifications", self.total),
            styles::keybinding(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Full listing with a cursor row.
pub struct CertificationList<'a> {
    certifications: &'a [Certification],
    cursor: usize,
}

impl<'a> CertificationList<'a> {
    pub fn new(certifications: &'a [Certification], cursor: usize) -> Self {
        Self {
            certifications,
            cursor,
        }
    }
}

impl Widget for CertificationList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(true).title(" All Certifications ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for (i, cert) in self.certifications.iter().enumerate() {
            let row = format!(" {}  {} · {} ", cert.date, cert.title, cert.organization);
            let style = if i == self.cursor {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(Span::styled(row, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Detail lightbox content for a single certification.
pub struct CertificationModal<'a> {
    certification: &'a Certification,
}

impl<'a> CertificationModal<'a> {
    pub fn new(certification: &'a Certification) -> Self {
        Self { certification }
    }
}

impl Widget for CertificationModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::modal_block(" Certification ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.certification.title.clone(),
                styles::text_bright(),
            )),
            Line::from(Span::styled(
                self.certification.organization.clone(),
                styles::accent(),
            )),
            Line::from(Span::styled(
                self.certification.date.clone(),
                styles::text_muted(),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("[{}]", self.certification.image.display()),
                styles::text_muted(),
            )),
            Line::default(),
            Line::from(Span::styled("Esc / click outside to close", styles::keybinding())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
