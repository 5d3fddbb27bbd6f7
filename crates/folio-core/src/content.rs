//! The static portfolio content.
//!
//! This is the declarative data the whole UI renders from. Nothing here is
//! read from disk or the network; edit this file to change what the
//! portfolio says.

use std::path::PathBuf;

use crate::types::{
    About, Certification, ContactChannel, EducationEntry, ExperienceEntry, Footer, Portfolio,
    Profile, Project, ProjectCategory, SkillCategory, SocialLink, Tool,
};

fn s(v: &str) -> String {
    v.to_string()
}

/// Build the full portfolio content.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: profile(),
        about: about(),
        education: education(),
        skill_categories: skill_categories(),
        tools: tools(),
        experiences: experiences(),
        project_categories: project_categories(),
        projects: projects(),
        certifications: certifications(),
        contact_channels: contact_channels(),
        footer: footer(),
    }
}

fn profile() -> Profile {
    Profile {
        name: s("Jordan Reyes"),
        greeting: s("Hello, I'm"),
        rotating_phrases: vec![
            s("Systems Programmer"),
            s("Backend Developer"),
            s("Open Source Contributor"),
            s("Problem Solver"),
        ],
        tagline: s(
            "A systems programmer who likes small, sharp tools. I build backend \
             services, developer tooling, and the occasional terminal UI, with a \
             focus on reliability and readable code.",
        ),
        social_links: vec![
            SocialLink {
                name: s("GitHub"),
                url: s("https://github.com/jordanreyes"),
            },
            SocialLink {
                name: s("LinkedIn"),
                url: s("https://www.linkedin.com/in/jordan-reyes-dev"),
            },
            SocialLink {
                name: s("Email"),
                url: s("mailto:jordan.reyes.dev@gmail.com"),
            },
        ],
    }
}

fn about() -> About {
    About {
        paragraphs: vec![
            s(
                "I'm a backend and systems developer based in Portland. I spend most \
                 of my time in Rust and Python, building services that stay up and \
                 tools that stay out of the way.",
            ),
            s(
                "Away from the keyboard I run, roast coffee badly, and maintain a \
                 couple of small open source projects that people occasionally file \
                 very polite issues against.",
            ),
        ],
        highlights: vec![
            (s("Experience"), s("4+ years")),
            (s("Projects shipped"), s("20+")),
            (s("Open source"), s("6 maintained crates")),
        ],
    }
}

fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            institution: s("Portland State University"),
            degree: s("B.S. Computer Science"),
            period: s("2017 - 2021"),
            detail: s("Focus on operating systems and distributed computing."),
        },
        EducationEntry {
            institution: s("Lincoln High School"),
            degree: s("High School Diploma"),
            period: s("2013 - 2017"),
            detail: s("Math and science track; founded the programming club."),
        },
    ]
}

fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: s("technical"),
            title: s("Technical Skills"),
            icon: s("💻"),
            skills: vec![
                s("Rust"),
                s("Python"),
                s("Go"),
                s("SQL"),
                s("C"),
                s("JavaScript"),
                s("Linux"),
                s("Docker"),
            ],
        },
        SkillCategory {
            id: s("design"),
            title: s("Design & Writing"),
            icon: s("🎨"),
            skills: vec![
                s("API design"),
                s("Technical writing"),
                s("Documentation"),
                s("Diagramming"),
            ],
        },
        SkillCategory {
            id: s("soft"),
            title: s("Soft Skills"),
            icon: s("🤝"),
            skills: vec![
                s("Problem Solving"),
                s("Code Review"),
                s("Mentoring"),
                s("Teamwork"),
                s("Communication"),
            ],
        },
    ]
}

fn tools() -> Vec<Tool> {
    [
        "Neovim",
        "Git",
        "PostgreSQL",
        "Redis",
        "Grafana",
        "Wireshark",
        "tmux",
        "GitHub Actions",
    ]
    .iter()
    .map(|name| Tool { name: s(name) })
    .collect()
}

fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: s("northwire"),
            position: s("Backend Engineer"),
            company: s("Northwire Systems"),
            period: s("2023 - Present"),
            location: s("Portland, OR"),
            responsibilities: vec![
                s("Design and operate ingestion services handling peak loads of 40k events/s"),
                s("Own the internal job scheduler and its on-call rotation"),
                s("Review designs and code across two backend teams"),
                s("Drive incident postmortems and reliability follow-ups"),
            ],
            technologies: vec![s("Rust"), s("PostgreSQL"), s("Kafka"), s("Kubernetes")],
            achievements: vec![
                s("Cut p99 ingestion latency by 60% by reworking batching"),
                s("Led the migration off a legacy queue with zero downtime"),
            ],
        },
        ExperienceEntry {
            id: s("brightpath"),
            position: s("Software Engineering Intern"),
            company: s("Brightpath Labs"),
            period: s("2021 - 2022"),
            location: s("Remote"),
            responsibilities: vec![
                s("Built internal dashboards and CLI tooling for the data team"),
                s("Wrote integration tests for the public REST API"),
                s("Triaged and fixed customer-reported bugs"),
            ],
            technologies: vec![s("Python"), s("Flask"), s("Docker"), s("Git")],
            achievements: vec![
                s("Shipped a log search tool still used by the whole team"),
                s("Reduced flaky test rate in CI from 9% to under 1%"),
            ],
        },
    ]
}

fn project_categories() -> Vec<ProjectCategory> {
    vec![
        ProjectCategory {
            id: s("major"),
            name: s("Major Projects"),
        },
        ProjectCategory {
            id: s("freelance"),
            name: s("Freelance Work"),
        },
        ProjectCategory {
            id: s("opensource"),
            name: s("Open Source"),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: s("ledgerline"),
            period: s("2024 - 2025"),
            description: s(
                "Append-only financial event store with snapshot compaction and a \
                 query DSL, built for a trading-journal product.",
            ),
            category_id: s("major"),
            tags: vec![s("Rust"), s("PostgreSQL"), s("Event Sourcing")],
            features: vec![
                s("Crash-safe write-ahead segment format"),
                s("Point-in-time snapshot queries"),
                s("Streaming replication to read replicas"),
            ],
            repo_url: Some(s("https://github.com/jordanreyes/ledgerline")),
        },
        Project {
            title: s("parcel-watch"),
            period: s("2023"),
            description: s(
                "Delivery-tracking aggregator for a local courier company: polls \
                 carrier APIs and pushes status changes to drivers' phones.",
            ),
            category_id: s("freelance"),
            tags: vec![s("Go"), s("Redis"), s("Webhooks")],
            features: vec![
                s("Carrier adapters behind one normalized status model"),
                s("Exactly-once webhook delivery with retry budget"),
            ],
            repo_url: None,
        },
        Project {
            title: s("tabular"),
            period: s("2022 - Present"),
            description: s(
                "A small crate for rendering aligned unicode tables in terminal \
                 output. ~200k downloads and counting.",
            ),
            category_id: s("opensource"),
            tags: vec![s("Rust"), s("CLI")],
            features: vec![
                s("Width-aware column sizing for CJK and emoji"),
                s("Zero dependencies in the default feature set"),
            ],
            repo_url: Some(s("https://github.com/jordanreyes/tabular")),
        },
        Project {
            title: s("chirp-relay"),
            period: s("2023 - Present"),
            description: s(
                "Self-hosted notification relay that fans out alerts from cron jobs \
                 and CI to email, desktop, and phone.",
            ),
            category_id: s("opensource"),
            tags: vec![s("Rust"), s("SQLite"), s("SMTP")],
            features: vec![
                s("Single static binary, config in one TOML file"),
                s("Per-channel rate limiting and quiet hours"),
            ],
            repo_url: Some(s("https://github.com/jordanreyes/chirp-relay")),
        },
    ]
}

fn certifications() -> Vec<Certification> {
    let cert = |title: &str, organization: &str, date: &str, image: &str| Certification {
        title: s(title),
        organization: s(organization),
        date: s(date),
        image: PathBuf::from(image),
    };
    vec![
        cert(
            "CKA: Certified Kubernetes Administrator",
            "Cloud Native Computing Foundation",
            "Mar 2025",
            "images/cka.png",
        ),
        cert(
            "AWS Certified Solutions Architect - Associate",
            "Amazon Web Services",
            "Nov 2024",
            "images/aws-saa.png",
        ),
        cert(
            "PostgreSQL 15 Professional",
            "EDB",
            "Jun 2024",
            "images/postgres.png",
        ),
        cert(
            "Rust for Systems Programmers",
            "Linux Foundation",
            "Jan 2024",
            "images/rust-lf.png",
        ),
        cert(
            "Site Reliability Engineering Fundamentals",
            "Coursera",
            "Sep 2023",
            "images/sre.png",
        ),
        cert(
            "Deep Dive into Containers",
            "O'Reilly",
            "May 2023",
            "images/containers.png",
        ),
        cert(
            "Technical Writing One",
            "Google",
            "Feb 2023",
            "images/techwriting.png",
        ),
        cert(
            "Open Source Software Development",
            "Linux Foundation",
            "Aug 2022",
            "images/oss-dev.png",
        ),
    ]
}

fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            label: s("Phone"),
            value: s("+1 503 555 0164"),
            link: s("tel:+15035550164"),
        },
        ContactChannel {
            label: s("Email"),
            value: s("jordan.reyes.dev@gmail.com"),
            link: s("mailto:jordan.reyes.dev@gmail.com"),
        },
        ContactChannel {
            label: s("Location"),
            value: s("Portland, OR, USA"),
            link: s("#"),
        },
    ]
}

fn footer() -> Footer {
    Footer {
        cta_heading: s("Let's build something"),
        cta: s("Open to backend and systems roles, freelance work, and open source."),
        quick_links: vec![s("About"), s("Skills"), s("Projects"), s("Contact")],
        copyright: s("© 2025 Jordan Reyes. All rights reserved."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_collection_is_non_empty() {
        let p = portfolio();
        assert!(!p.profile.rotating_phrases.is_empty());
        assert!(!p.about.paragraphs.is_empty());
        assert!(!p.education.is_empty());
        assert!(!p.skill_categories.is_empty());
        assert!(!p.tools.is_empty());
        assert!(!p.experiences.is_empty());
        assert!(!p.project_categories.is_empty());
        assert!(!p.projects.is_empty());
        assert!(!p.certifications.is_empty());
        assert!(!p.contact_channels.is_empty());
        assert!(!p.footer.quick_links.is_empty());
        assert!(!p.footer.copyright.is_empty());
    }

    #[test]
    fn test_option_set_ids_are_unique() {
        let p = portfolio();
        let unique = |ids: Vec<&str>| {
            let set: HashSet<_> = ids.iter().collect();
            set.len() == ids.len()
        };
        assert!(unique(
            p.skill_categories.iter().map(|c| c.id.as_str()).collect()
        ));
        assert!(unique(p.experiences.iter().map(|e| e.id.as_str()).collect()));
        assert!(unique(
            p.project_categories.iter().map(|c| c.id.as_str()).collect()
        ));
    }

    #[test]
    fn test_every_project_references_a_known_category() {
        let p = portfolio();
        let known: HashSet<_> = p.project_categories.iter().map(|c| c.id.as_str()).collect();
        for project in &p.projects {
            assert!(
                known.contains(project.category_id.as_str()),
                "project {} has unknown category {}",
                project.title,
                project.category_id
            );
        }
    }

    #[test]
    fn test_certification_preview_is_first_three() {
        let p = portfolio();
        let preview = p.certification_preview();
        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0], p.certifications[0]);
        assert_eq!(preview[2], p.certifications[2]);
    }

    #[test]
    fn test_projects_in_category_filters() {
        let p = portfolio();
        let oss = p.projects_in_category("opensource");
        assert!(!oss.is_empty());
        assert!(oss.iter().all(|pr| pr.category_id == "opensource"));
        assert!(p.projects_in_category("nope").is_empty());
    }
}
