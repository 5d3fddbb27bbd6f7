//! Experience section panel
//!
//! Company tabs on top, the selected role's details below.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_app::view_select::SelectableView;
use folio_core::types::ExperienceEntry;

use crate::theme::styles;

pub struct ExperiencePanel<'a> {
    entries: &'a [ExperienceEntry],
    view: &'a SelectableView,
}

impl<'a> ExperiencePanel<'a> {
    pub fn new(entries: &'a [ExperienceEntry], view: &'a SelectableView) -> Self {
        Self { entries, view }
    }
}

impl Widget for ExperiencePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Experience ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut tabs = Vec::new();
        for (i, option) in self.view.options().iter().enumerate() {
            let style = if i == self.view.active_index() {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            tabs.push(Span::styled(format!(" {} ", option.label), style));
            tabs.push(Span::raw(" "));
        }

        let mut lines = vec![Line::from(tabs), Line::default()];

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.id == self.view.current().id)
        {
            lines.push(Line::from(vec![
                Span::styled(entry.position.clone(), styles::text_bright()),
                Span::styled(format!(" @ {}", entry.company), styles::accent()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("{}  {}", entry.period, entry.location),
                styles::text_muted(),
            )));
            lines.push(Line::default());
            for r in &entry.responsibilities {
                lines.push(Line::from(vec![
                    Span::styled("▸ ", styles::accent()),
                    Span::styled(r.clone(), styles::text_primary()),
                ]));
            }
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Tech: ", styles::accent()),
                Span::styled(entry.technologies.join(", "), styles::text_secondary()),
            ]));
            for a in &entry.achievements {
                lines.push(Line::from(vec![
                    Span::styled("★ ", styles::keybinding()),
                    Span::styled(a.clone(), styles::text_secondary()),
                ]));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
