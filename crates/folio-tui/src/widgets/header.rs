//! Header bar widget
//!
//! Shows the author name on the left and the numbered section tabs on the
//! right, inside a bordered panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::view_select::SelectableView;

use crate::theme::{palette, styles};

/// Main header showing the author name and section tabs
pub struct MainHeader<'a> {
    name: &'a str,
    sections: &'a SelectableView,
}

impl<'a> MainHeader<'a> {
    pub fn new(name: &'a str, sections: &'a SelectableView) -> Self {
        Self { name, sections }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = vec![
            Span::styled(format!(" {} ", self.name), styles::text_bright()),
            Span::styled("│ ", styles::border_inactive()),
        ];
        for (i, option) in self.sections.options().iter().enumerate() {
            let label = format!(" {} {} ", i + 1, option.label);
            let style = if i == self.sections.active_index() {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.tabs_line()).render(inner, buf);
    }
}
