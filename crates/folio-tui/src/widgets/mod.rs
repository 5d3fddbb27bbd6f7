//! Custom widget components

mod certifications;
mod contact;
mod experience;
mod header;
mod hero;
pub mod modal_overlay;
mod projects;
mod sections;
mod skills;
mod status_bar;

pub use certifications::{CertificationList, CertificationModal, CertificationPreview};
pub use contact::ContactPanel;
pub use experience::ExperiencePanel;
pub use header::MainHeader;
pub use hero::Hero;
pub use projects::ProjectsPanel;
pub use sections::{AboutPanel, EducationPanel, FooterPanel};
pub use skills::SkillsPanel;
pub use status_bar::StatusBar;
