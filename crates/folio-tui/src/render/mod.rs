//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use folio_app::modal::Region;
use folio_app::state::{section, AppState, Route};

use crate::theme::palette;
use crate::widgets::{self, modal_overlay};
use crate::layout;

/// Render the complete UI (View function in TEA)
///
/// Pure apart from one write-back: the lightbox content rect is recorded on
/// the modal controller so click routing can tell content from backdrop.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    match state.route() {
        Route::Home => render_home(frame, &areas, state),
        Route::Certifications => render_certifications_route(frame, &areas, state),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    render_modal(frame, state);
}

fn render_home(frame: &mut Frame, areas: &layout::ScreenAreas, state: &AppState) {
    frame.render_widget(
        widgets::MainHeader::new(&state.content.profile.name, &state.sections),
        areas.header,
    );

    let content = areas.content;
    match state.active_section() {
        section::ABOUT => {
            frame.render_widget(widgets::AboutPanel::new(&state.content.about), content)
        }
        section::EDUCATION => {
            frame.render_widget(widgets::EducationPanel::new(&state.content.education), content)
        }
        section::SKILLS => frame.render_widget(
            widgets::SkillsPanel::new(
                &state.content.skill_categories,
                &state.content.tools,
                &state.skills_view,
            ),
            content,
        ),
        section::EXPERIENCE => frame.render_widget(
            widgets::ExperiencePanel::new(&state.content.experiences, &state.experience_view),
            content,
        ),
        section::PROJECTS => frame.render_widget(
            widgets::ProjectsPanel::new(&state.content, &state.projects_view),
            content,
        ),
        section::CERTIFICATIONS => frame.render_widget(
            widgets::CertificationPreview::new(
                state.content.certification_preview(),
                state.content.certifications.len(),
            ),
            content,
        ),
        section::CONTACT => frame.render_widget(
            widgets::ContactPanel::new(&state.content.contact_channels, &state.contact),
            content,
        ),
        // section::HOME and anything unknown falls back to the hero page:
        // hero on top, footer block pinned below it
        _ => {
            let rows =
                Layout::vertical([Constraint::Min(5), Constraint::Length(6)]).split(content);
            frame.render_widget(
                widgets::Hero::new(&state.content.profile, state.typewriter.rendered()),
                rows[0],
            );
            frame.render_widget(widgets::FooterPanel::new(&state.content.footer), rows[1]);
        }
    }

    // Enter transition: the incoming panel renders dimmed until the
    // countdown expires, so two opaque panels never coexist. Inner tab
    // switches (skills/experience/projects) dim the same way.
    let inner_transition = match state.active_section() {
        section::SKILLS => state.skills_view.in_transition(),
        section::EXPERIENCE => state.experience_view.in_transition(),
        section::PROJECTS => state.projects_view.in_transition(),
        _ => false,
    };
    if state.sections.in_transition() || inner_transition {
        modal_overlay::dim_background(frame.buffer_mut(), content);
    }
}

fn render_certifications_route(frame: &mut Frame, areas: &layout::ScreenAreas, state: &AppState) {
    frame.render_widget(
        widgets::MainHeader::new(&state.content.profile.name, &state.sections),
        areas.header,
    );
    frame.render_widget(
        widgets::CertificationList::new(&state.content.certifications, state.cert_cursor),
        areas.content,
    );
}

/// Lightbox dimensions in terminal cells.
const MODAL_WIDTH: u16 = 54;
const MODAL_HEIGHT: u16 = 13;

fn render_modal(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let Some(cert) = state.cert_modal.current().cloned() else {
        state.cert_modal.content_region = None;
        return;
    };

    let rect = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    {
        let buf = frame.buffer_mut();
        modal_overlay::dim_background(buf, area);
        modal_overlay::render_shadow(buf, rect);
        modal_overlay::clear_area(buf, rect);
    }
    frame.render_widget(widgets::CertificationModal::new(&cert), rect);

    state.cert_modal.content_region = Some(Region {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    });
}

/// The rect the lightbox would occupy on a terminal of the given size.
pub fn modal_rect(area: Rect) -> Rect {
    modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area)
}
