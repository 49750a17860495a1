//! View model for the content tabs
//!
//! Flattens a tab's configured content into typed lines. The view picks
//! the styles and handles wrapping and scrolling.

use crate::state::Section;
use folio_config::SiteContent;

pub const EMPTY_SECTION: &str = "Nothing here yet.";
const STUDIO_NOTE: &str = "Privacy-first, security-focused, and transparent by design. \
                           Every project is crafted end-to-end by a single developer.";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionViewModel {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub lines: Vec<SectionLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionLine {
    /// Card or group heading
    Title(String),
    /// Secondary detail under a title
    Caption(String),
    Text(String),
    /// Label with its description on one line
    Entry { label: String, detail: String },
    Tags(Vec<String>),
    Link { label: String, url: String },
    Blank,
}

impl SectionViewModel {
    /// `None` for the Projects tab, which has its own view model
    pub fn for_section(section: Section, content: &SiteContent) -> Option<Self> {
        let (eyebrow, title, subtitle, mut lines) = match section {
            Section::Projects => return None,
            Section::About => (
                "Identity",
                "Developer + Studio",
                "A solo developer with a studio mindset. Building full-stack applications \
                 with modern technologies and cloud-first architecture.",
                about_lines(content),
            ),
            Section::Apps => (
                "Production",
                "Live Applications",
                "Production-ready applications built from the ground up: secure, scalable, \
                 and actively maintained.",
                app_lines(content),
            ),
            Section::Skills => (
                "Expertise",
                "Technical Skills & Expertise",
                "Comprehensive skill set across cloud architecture, AI, full-stack \
                 development, and Agile leadership",
                skill_lines(content),
            ),
            Section::Certifications => (
                "Credentials",
                "Certifications & Credentials",
                "Professional certifications in cloud architecture, AI, and modern \
                 development practices",
                certification_lines(content),
            ),
            Section::Process => (
                "Workflow",
                "How I Build",
                "Development process from discovery to production, following Agile and \
                 SAFe methodologies.",
                process_lines(content),
            ),
            Section::Contact => (
                "Connect",
                "Get in Touch",
                "Find me on these platforms.",
                contact_lines(content),
            ),
        };

        while lines.last() == Some(&SectionLine::Blank) {
            lines.pop();
        }
        if lines.is_empty() {
            lines.push(SectionLine::Text(EMPTY_SECTION.to_string()));
        }

        Some(Self {
            eyebrow,
            title,
            subtitle,
            lines,
        })
    }
}

fn about_lines(content: &SiteContent) -> Vec<SectionLine> {
    let mut lines = Vec::new();

    let personal = &content.personal;
    if !personal.name.is_empty() {
        lines.push(SectionLine::Title(personal.name.clone()));
        push_if_present(&mut lines, SectionLine::Caption, &personal.title);
        push_if_present(&mut lines, SectionLine::Text, &personal.summary);
        push_if_present(&mut lines, SectionLine::Text, &personal.tagline);
        lines.push(SectionLine::Blank);
    }

    let organization = &content.organization;
    if !organization.name.is_empty() {
        lines.push(SectionLine::Title(format!("About {}", organization.name)));
        push_if_present(&mut lines, SectionLine::Text, &organization.description);
        lines.push(SectionLine::Caption(STUDIO_NOTE.to_string()));
        lines.push(SectionLine::Blank);
    }

    if !content.technologies.is_empty() {
        lines.push(SectionLine::Title("Core Technologies".to_string()));
        lines.extend(content.technologies.iter().map(|tech| SectionLine::Entry {
            label: tech.label.clone(),
            detail: tech.detail.clone(),
        }));
    }

    lines
}

fn app_lines(content: &SiteContent) -> Vec<SectionLine> {
    let mut lines = Vec::new();
    for app in &content.featured_apps {
        lines.push(SectionLine::Title(app.name.clone()));
        push_if_present(&mut lines, SectionLine::Text, &app.description);
        if !app.tags.is_empty() {
            lines.push(SectionLine::Tags(app.tags.clone()));
        }
        lines.push(SectionLine::Link {
            label: "Visit".to_string(),
            url: app.url.clone(),
        });
        lines.push(SectionLine::Blank);
    }
    lines
}

fn skill_lines(content: &SiteContent) -> Vec<SectionLine> {
    let mut lines = Vec::new();
    for category in &content.skills {
        lines.push(SectionLine::Title(format!(
            "{} ({})",
            category.category,
            category.skills.len()
        )));
        lines.push(SectionLine::Tags(category.skills.clone()));
        lines.push(SectionLine::Blank);
    }

    if !content.skills.is_empty() {
        lines.push(SectionLine::Caption(format!(
            "{}+ technical skills and competencies across {} major domains",
            content.skill_count(),
            content.skills.len()
        )));
    }
    lines
}

fn certification_lines(content: &SiteContent) -> Vec<SectionLine> {
    let mut lines = Vec::new();
    for cert in &content.certifications {
        lines.push(SectionLine::Title(cert.title.clone()));
        lines.push(SectionLine::Caption(format!("{} · {}", cert.issuer, cert.date)));
        if let Some(id) = &cert.credential_id {
            lines.push(SectionLine::Caption(format!("Credential ID: {id}")));
        }
        if !cert.skills.is_empty() {
            lines.push(SectionLine::Tags(cert.skills.clone()));
        }
        lines.push(SectionLine::Blank);
    }
    lines
}

fn process_lines(content: &SiteContent) -> Vec<SectionLine> {
    let mut lines = Vec::new();
    for (index, step) in content.process.iter().enumerate() {
        lines.push(SectionLine::Title(format!("{:02}  {}", index + 1, step.title)));
        push_if_present(&mut lines, SectionLine::Text, &step.description);
        lines.push(SectionLine::Blank);
    }
    lines
}

fn contact_lines(content: &SiteContent) -> Vec<SectionLine> {
    content
        .contact
        .iter()
        .map(|link| SectionLine::Link {
            label: link.label.clone(),
            url: link.url.clone(),
        })
        .collect()
}

fn push_if_present(lines: &mut Vec<SectionLine>, line: fn(String) -> SectionLine, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        lines.push(line(text.to_string()));
    }
}
