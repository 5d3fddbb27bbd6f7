//! Render smoke tests against a test backend

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use folio_app::message::Message;
use folio_app::state::{section, AppState, Route};
use folio_app::Settings;
use folio_core::content;

use super::{modal_rect, view};
use crate::theme::palette;

fn state() -> AppState {
    AppState::new(Settings::default(), content::portfolio())
}

fn draw(state: &mut AppState) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    (0..area.height)
        .flat_map(|y| (0..area.width).map(move |x| (x, y)))
        .map(|(x, y)| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_every_section_renders_without_panicking() {
    let mut s = state();
    let count = s.sections.len();
    for i in 0..count {
        s.sections.select_index(i);
        while s.sections.in_transition() {
            s.sections.tick();
        }
        draw(&mut s);
    }
}

/// True when every content-area cell carries the dimmed foreground.
fn content_dimmed(terminal: &Terminal<TestBackend>) -> bool {
    let buffer = terminal.backend().buffer();
    // Content spans rows 3..29 on the 100x30 harness terminal
    (3..29).all(|y| (0..100).all(|x| buffer[(x, y)].fg == palette::TEXT_MUTED))
}

#[test]
fn test_home_route_shows_the_hero() {
    let mut s = state();
    s.typewriter.tick();
    let terminal = draw(&mut s);
    let text = screen_text(&terminal);
    assert!(text.contains(&s.content.profile.name));
    assert!(text.contains("I'm a"));
}

#[test]
fn test_home_route_shows_the_footer() {
    let mut s = state();
    let terminal = draw(&mut s);
    let text = screen_text(&terminal);
    assert!(text.contains(s.content.footer.cta_heading.as_str()));
    assert!(text.contains(s.content.footer.copyright.as_str()));
}

#[test]
fn test_inner_tab_switch_dims_the_panel_until_the_countdown_ends() {
    let mut s = state();
    s.sections.select(section::SKILLS);
    while s.sections.in_transition() {
        s.sections.tick();
    }

    s.skills_view.select_index(1);
    let terminal = draw(&mut s);
    assert!(content_dimmed(&terminal));

    while s.skills_view.in_transition() {
        s.skills_view.tick();
    }
    let terminal = draw(&mut s);
    assert!(!content_dimmed(&terminal));
}

#[test]
fn test_certifications_route_lists_everything() {
    let mut s = state();
    s.push_route(Route::Certifications);
    let terminal = draw(&mut s);
    let text = screen_text(&terminal);
    for cert in &s.content.certifications {
        assert!(text.contains(cert.date.as_str()));
    }
}

#[test]
fn test_open_modal_records_its_content_region() {
    let mut s = state();
    s.push_route(Route::Certifications);
    s.cert_modal.open(s.content.certifications[0].clone());
    assert!(s.cert_modal.content_region.is_none());

    draw(&mut s);

    let region = s.cert_modal.content_region.unwrap();
    let expected = modal_rect(ratatui::layout::Rect::new(0, 0, 100, 30));
    assert_eq!(region.x, expected.x);
    assert_eq!(region.y, expected.y);
    assert_eq!(region.width, expected.width);
    assert_eq!(region.height, expected.height);
}

#[test]
fn test_closing_the_modal_clears_the_region() {
    let mut s = state();
    s.cert_modal.open(s.content.certifications[0].clone());
    draw(&mut s);
    assert!(s.cert_modal.content_region.is_some());

    s.cert_modal.close();
    draw(&mut s);
    assert!(s.cert_modal.content_region.is_none());
}

#[test]
fn test_recorded_region_routes_clicks_correctly() {
    use folio_app::handler::update;

    let mut s = state();
    s.push_route(Route::Certifications);
    s.cert_modal.open(s.content.certifications[0].clone());
    draw(&mut s);

    let region = s.cert_modal.content_region.unwrap();

    // Click inside the content: modal stays open
    let result = update(
        &mut s,
        Message::Click {
            column: region.x + 1,
            row: region.y + 1,
        },
    );
    assert!(result.message.is_none());
    assert!(s.cert_modal.is_open());

    // Click on the backdrop: update asks to close
    let result = update(&mut s, Message::Click { column: 0, row: 0 });
    assert_eq!(result.message, Some(Message::CloseModal));
}

#[test]
fn test_contact_section_renders_the_form() {
    let mut s = state();
    s.sections.select(section::CONTACT);
    while s.sections.in_transition() {
        s.sections.tick();
    }
    s.contact.editing = true;
    s.contact.name = "Ada".into();
    let terminal = draw(&mut s);
    let text = screen_text(&terminal);
    assert!(text.contains("Full Name"));
    assert!(text.contains("Ada"));
}
