//! Portfolio data model
//!
//! Every record here is immutable display data: constructed once by
//! [`crate::content::portfolio()`] and never mutated at runtime. The only
//! exception is [`ContactMessage`], which is assembled from the contact form
//! and handed to the mail collaborator.

use serde::Serialize;
use std::path::PathBuf;

/// Root record holding every section's display data.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub education: Vec<EducationEntry>,
    pub skill_categories: Vec<SkillCategory>,
    pub tools: Vec<Tool>,
    pub experiences: Vec<ExperienceEntry>,
    pub project_categories: Vec<ProjectCategory>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub contact_channels: Vec<ContactChannel>,
    pub footer: Footer,
}

impl Portfolio {
    /// Certifications shown on the home route (the full list lives on its
    /// own route).
    pub fn certification_preview(&self) -> &[Certification] {
        let n = self.certifications.len().min(3);
        &self.certifications[..n]
    }

    /// Projects belonging to one category, in declaration order.
    pub fn projects_in_category(&self, category_id: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.category_id == category_id)
            .collect()
    }
}

/// Hero section data: who this is and what rotates in the typewriter line.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    /// Phrases cycled by the rotating-text engine, in order.
    pub rotating_phrases: Vec<String>,
    pub tagline: String,
    pub social_links: Vec<SocialLink>,
}

/// A social profile link shown in the hero and contact sections.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// About section: bio paragraphs plus a few label/value highlights.
#[derive(Debug, Clone)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub detail: String,
}

/// One selectable skills category (the skills section's option set).
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub skills: Vec<String>,
}

/// An entry in the tools grid below the skill categories.
#[derive(Debug, Clone)]
pub struct Tool {
    pub name: String,
}

/// One selectable experience tab (the experience section's option set).
#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub id: String,
    pub position: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

/// One selectable project filter (the projects section's option set).
#[derive(Debug, Clone)]
pub struct ProjectCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
    pub category_id: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub repo_url: Option<String>,
}

/// An inspectable certification record: listed in the grid, opened in the
/// detail lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub image: PathBuf,
}

/// Footer block shown under the hero: call to action, quick links to other
/// sections, and the copyright line.
#[derive(Debug, Clone)]
pub struct Footer {
    pub cta_heading: String,
    pub cta: String,
    pub quick_links: Vec<String>,
    pub copyright: String,
}

/// A way to reach the author (phone, email, location).
#[derive(Debug, Clone)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    pub link: String,
}

/// The four required fields collected by the contact form and forwarded to
/// the transactional-email collaborator as `template_params`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
