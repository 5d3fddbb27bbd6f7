//! About, education, and footer panels

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::types::{About, EducationEntry, Footer};

use crate::theme::styles;

pub struct AboutPanel<'a> {
    about: &'a About,
}

impl<'a> AboutPanel<'a> {
    pub fn new(about: &'a About) -> Self {
        Self { about }
    }
}

impl Widget for AboutPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" About Me ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for paragraph in &self.about.paragraphs {
            lines.push(Line::from(Span::styled(
                paragraph.clone(),
                styles::text_primary(),
            )));
            lines.push(Line::default());
        }
        for (label, value) in &self.about.highlights {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), styles::accent()),
                Span::styled(value.clone(), styles::text_secondary()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

pub struct EducationPanel<'a> {
    entries: &'a [EducationEntry],
}

impl<'a> EducationPanel<'a> {
    pub fn new(entries: &'a [EducationEntry]) -> Self {
        Self { entries }
    }
}

impl Widget for EducationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Education ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();
        for entry in self.entries {
            lines.push(Line::from(vec![
                Span::styled(entry.degree.clone(), styles::text_bright()),
                Span::styled(format!("  {}", entry.period), styles::text_muted()),
            ]));
            lines.push(Line::from(Span::styled(
                entry.institution.clone(),
                styles::accent(),
            )));
            lines.push(Line::from(Span::styled(
                entry.detail.clone(),
                styles::text_secondary(),
            )));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Footer block under the hero: call to action, quick links, copyright.
pub struct FooterPanel<'a> {
    footer: &'a Footer,
}

impl<'a> FooterPanel<'a> {
    pub fn new(footer: &'a Footer) -> Self {
        Self { footer }
    }
}

impl Widget for FooterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let links = self.footer.quick_links.join(" · ");

        let lines = vec![
            Line::from(vec![
                Span::styled(self.footer.cta_heading.clone(), styles::accent_bold()),
                Span::styled(
                    format!("  {}", self.footer.cta),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Quick links: ", styles::text_muted()),
                Span::styled(links, styles::keybinding()),
            ]),
            Line::from(Span::styled(
                self.footer.copyright.clone(),
                styles::text_muted(),
            )),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content;

    fn panel_text(render: impl FnOnce(Rect, &mut Buffer), width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf);
        (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_about_panel_shows_highlights() {
        let portfolio = content::portfolio();
        let text = panel_text(
            |area, buf| AboutPanel::new(&portfolio.about).render(area, buf),
            100,
            30,
        );
        let (label, _) = &portfolio.about.highlights[0];
        assert!(text.contains(label.as_str()));
    }

    #[test]
    fn test_education_panel_lists_every_institution() {
        let portfolio = content::portfolio();
        let text = panel_text(
            |area, buf| EducationPanel::new(&portfolio.education).render(area, buf),
            100,
            30,
        );
        for entry in &portfolio.education {
            assert!(text.contains(entry.institution.as_str()));
        }
    }

    #[test]
    fn test_footer_panel_shows_links_and_copyright() {
        let portfolio = content::portfolio();
        let text = panel_text(
            |area, buf| FooterPanel::new(&portfolio.footer).render(area, buf),
            100,
            6,
        );
        assert!(text.contains(portfolio.footer.cta_heading.as_str()));
        assert!(text.contains(portfolio.footer.quick_links[0].as_str()));
        assert!(text.contains(portfolio.footer.copyright.as_str()));
    }
}
