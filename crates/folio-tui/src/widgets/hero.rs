//! Hero section widget
//!
//! Greeting, name, the rotating typewriter line, tagline, and social links.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use folio_core::types::Profile;

use crate::theme::styles;

/// Block cursor appended to the typed text, like a terminal caret.
const CURSOR: &str = "▌";

pub struct Hero<'a> {
    profile: &'a Profile,
    /// Current output of the rotating-text engine.
    typed: &'a str,
}

impl<'a> Hero<'a> {
    pub fn new(profile: &'a Profile, typed: &'a str) -> Self {
        Self { profile, typed }
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let socials = self
            .profile
            .social_links
            .iter()
            .map(|s| format!("{} <{}>", s.name, s.url))
            .collect::<Vec<_>>()
            .join("   ");

        let lines = vec![
            Line::from(Span::styled(
                self.profile.greeting.clone(),
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                self.profile.name.clone(),
                styles::text_bright(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("I'm a ", styles::text_primary()),
                Span::styled(self.typed.to_string(), styles::accent_bold()),
                Span::styled(CURSOR, styles::accent()),
            ]),
            Line::default(),
            Line::from(Span::styled(
                self.profile.tagline.clone(),
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled(socials, styles::text_muted())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
