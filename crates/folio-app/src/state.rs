//! Application state (Model in TEA pattern)

use folio_core::types::{Certification, Portfolio};

use crate::config::Settings;
use crate::contact::ContactForm;
use crate::modal::ModalController;
use crate::typewriter::Typewriter;
use crate::view_select::{SelectableView, ViewOption};

/// Section ids used by the section navigator and the render dispatch.
pub mod section {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const EDUCATION: &str = "education";
    pub const SKILLS: &str = "skills";
    pub const EXPERIENCE: &str = "experience";
    pub const PROJECTS: &str = "projects";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const CONTACT: &str = "contact";
}

/// The section tabs, in display order.
const SECTIONS: &[(&str, &str)] = &[
    (section::HOME, "Home"),
    (section::ABOUT, "About"),
    (section::EDUCATION, "Education"),
    (section::SKILLS, "Skills"),
    (section::EXPERIENCE, "Experience"),
    (section::PROJECTS, "Projects"),
    (section::CERTIFICATIONS, "Certs"),
    (section::CONTACT, "Contact"),
];

/// Addressable views. `Home` is the composite section page; `Certifications`
/// is the full listing reachable from its preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Certifications,
}

/// Complete application state.
///
/// Every component owns an isolated slice of view state; none of them
/// communicate with each other directly (the update function composes them).
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub content: Portfolio,

    /// Route stack; never empty, `Home` at the bottom.
    routes: Vec<Route>,

    /// Section navigator (home/about/.../contact).
    pub sections: SelectableView,
    /// Hero typewriter line.
    pub typewriter: Typewriter,

    /// Skills category selector.
    pub skills_view: SelectableView,
    /// Experience tab selector.
    pub experience_view: SelectableView,
    /// Project category filter.
    pub projects_view: SelectableView,

    /// Cursor into the full certifications listing.
    pub cert_cursor: usize,
    /// Certification detail lightbox.
    pub cert_modal: ModalController<Certification>,

    pub contact: ContactForm,

    /// User-visible alert line (delivery failures, validation errors).
    pub alert: Option<String>,

    pub quitting: bool,
}

impl AppState {
    pub fn new(settings: Settings, content: Portfolio) -> Self {
        let sections = SelectableView::new(
            SECTIONS
                .iter()
                .map(|(id, label)| ViewOption::new(*id, *label))
                .collect(),
        );
        let typewriter = Typewriter::new(
            content.profile.rotating_phrases.clone(),
            settings.typewriter.type_delay_ms,
            settings.typewriter.hold_ms,
        );
        let skills_view = SelectableView::new(
            content
                .skill_categories
                .iter()
                .map(|c| ViewOption::new(c.id.clone(), c.title.clone()).with_icon(c.icon.clone()))
                .collect(),
        );
        let experience_view = SelectableView::new(
            content
                .experiences
                .iter()
                .map(|e| ViewOption::new(e.id.clone(), e.company.clone()))
                .collect(),
        );
        let projects_view = SelectableView::new(
            content
                .project_categories
                .iter()
                .map(|c| ViewOption::new(c.id.clone(), c.name.clone()))
                .collect(),
        );

        Self {
            settings,
            content,
            routes: vec![Route::Home],
            sections,
            typewriter,
            skills_view,
            experience_view,
            projects_view,
            cert_cursor: 0,
            cert_modal: ModalController::new(),
            contact: ContactForm::default(),
            alert: None,
            quitting: false,
        }
    }

    /// The route on top of the stack.
    pub fn route(&self) -> Route {
        *self.routes.last().unwrap_or(&Route::Home)
    }

    pub fn push_route(&mut self, route: Route) {
        if self.route() != route {
            self.routes.push(route);
        }
    }

    /// Pop the top route. The bottom entry stays; returns whether anything
    /// was popped.
    pub fn pop_route(&mut self) -> bool {
        if self.routes.len() > 1 {
            self.routes.pop();
            true
        } else {
            false
        }
    }

    /// Id of the active section on the home route.
    pub fn active_section(&self) -> &str {
        &self.sections.current().id
    }

    /// The active section's inner selectable view, if it has one.
    pub fn inner_view_mut(&mut self) -> Option<&mut SelectableView> {
        match self.sections.current().id.as_str() {
            section::SKILLS => Some(&mut self.skills_view),
            section::EXPERIENCE => Some(&mut self.experience_view),
            section::PROJECTS => Some(&mut self.projects_view),
            _ => None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Advance all transition countdowns by one frame tick.
    pub fn tick_transitions(&mut self) {
        self.sections.tick();
        self.skills_view.tick();
        self.experience_view.tick();
        self.projects_view.tick();
    }
}
