//! Projects section panel
//!
//! Category filter tabs on top, the matching project cards below.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_app::view_select::SelectableView;
use folio_core::types::Portfolio;

use crate::theme::styles;

pub struct ProjectsPanel<'a> {
    content: &'a Portfolio,
    view: &'a SelectableView,
}

impl<'a> ProjectsPanel<'a> {
    pub fn new(content: &'a Portfolio, view: &'a SelectableView) -> Self {
        Self { content, view }
    }
}

impl Widget for ProjectsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Projects ");
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

        for project in self.content.projects_in_category(&self.view.current().id) {
            lines.push(Line::from(vec![
                Span::styled(project.title.clone(), styles::text_bright()),
                Span::styled(format!("  {}", project.period), styles::text_muted()),
            ]));
            lines.push(Line::from(Span::styled(
                project.description.clone(),
                styles::text_primary(),
            )));
            let mut meta = vec![Span::styled(project.tags.join(" · "), styles::accent())];
            if let Some(repo) = &project.repo_url {
                meta.push(Span::styled(format!("  {repo}"), styles::text_muted()));
            }
            lines.push(Line::from(meta));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
