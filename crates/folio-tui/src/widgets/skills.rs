//! Skills section panel
//!
//! Category tabs on top, the selected category's skill list below, and the
//! tools row at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_app::view_select::SelectableView;
use folio_core::types::{SkillCategory, Tool};

use crate::theme::styles;

pub struct SkillsPanel<'a> {
    categories: &'a [SkillCategory],
    tools: &'a [Tool],
    view: &'a SelectableView,
}

impl<'a> SkillsPanel<'a> {
    pub fn new(categories: &'a [SkillCategory], tools: &'a [Tool], view: &'a SelectableView) -> Self {
        Self {
            categories,
            tools,
            view,
        }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, option) in self.view.options().iter().enumerate() {
            let label = if option.icon.is_empty() {
                format!(" {} ", option.label)
            } else {
                format!(" {} {} ", option.icon, option.label)
            };
            let style = if i == self.view.active_index() {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Widget for SkillsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Skills ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let active = self
            .categories
            .iter()
            .find(|c| c.id == self.view.current().id);

        let mut lines = vec![self.tabs_line(), Line::default()];
        if let Some(category) = active {
            for skill in &category.skills {
                lines.push(Line::from(vec![
                    Span::styled("▸ ", styles::accent()),
                    Span::styled(skill.clone(), styles::text_primary()),
                ]));
            }
        }
        lines.push(Line::default());
        let tools = self
            .tools
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(" · ");
        lines.push(Line::from(vec![
            Span::styled("Tools: ", styles::accent()),
            Span::styled(tools, styles::text_secondary()),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::state::AppState;
    use folio_app::Settings;
    use folio_core::content;

    fn panel_text(state: &AppState) -> String {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        SkillsPanel::new(
            &state.content.skill_categories,
            &state.content.tools,
            &state.skills_view,
        )
        .render(area, &mut buf);
        (0..30)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_selected_category_skills_are_listed() {
        let state = AppState::new(Settings::default(), content::portfolio());
        let text = panel_text(&state);
        let first = &state.content.skill_categories[0];
        assert!(text.contains(first.skills[0].as_str()));
    }

    #[test]
    fn test_switching_category_changes_the_list() {
        let mut state = AppState::new(Settings::default(), content::portfolio());
        let second = state.content.skill_categories[1].clone();
        state.skills_view.select(&second.id);
        let text = panel_text(&state);
        assert!(text.contains(second.skills[0].as_str()));
    }
}
