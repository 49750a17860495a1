//! Site content
//!
//! The text behind the About, Apps, Skills, Certifications, Process and
//! Contact tabs. Every table can be set in folio.toml; a table left out
//! falls back to the bundled `site_content.toml`.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const BUNDLED: &str = include_str!("site_content.toml");

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SiteContent {
    #[serde(default = "bundled_personal")]
    pub personal: Personal,

    #[serde(default = "bundled_organization")]
    pub organization: Organization,

    #[serde(default = "bundled_technologies")]
    pub technologies: Vec<Technology>,

    #[serde(default = "bundled_featured_apps")]
    pub featured_apps: Vec<FeaturedApp>,

    /// Skill categories, in display order
    #[serde(default = "bundled_skills")]
    pub skills: Vec<SkillCategory>,

    #[serde(default = "bundled_certifications")]
    pub certifications: Vec<Certification>,

    /// Workflow steps, in order
    #[serde(default = "bundled_process")]
    pub process: Vec<ProcessStep>,

    #[serde(default = "bundled_contact")]
    pub contact: Vec<ContactLink>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Personal {
    pub name: String,
    /// Role line shown under the name
    pub title: String,
    pub summary: String,
    pub tagline: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Technology {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FeaturedApp {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    /// As printed, e.g. "Jun 2025"
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

impl SiteContent {
    /// Content shipped with folio
    pub fn bundled() -> &'static SiteContent {
        static CONTENT: OnceLock<SiteContent> = OnceLock::new();
        CONTENT.get_or_init(|| {
            toml::from_str(BUNDLED).unwrap_or_else(|e| {
                log::error!("Bundled site content is invalid: {}", e);
                SiteContent::default()
            })
        })
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|category| category.skills.len()).sum()
    }
}

fn bundled_personal() -> Personal {
    SiteContent::bundled().personal.clone()
}

fn bundled_organization() -> Organization {
    SiteContent::bundled().organization.clone()
}

fn bundled_technologies() -> Vec<Technology> {
    SiteContent::bundled().technologies.clone()
}

fn bundled_featured_apps() -> Vec<FeaturedApp> {
    SiteContent::bundled().featured_apps.clone()
}

fn bundled_skills() -> Vec<SkillCategory> {
    SiteContent::bundled().skills.clone()
}

fn bundled_certifications() -> Vec<Certification> {
    SiteContent::bundled().certifications.clone()
}

fn bundled_process() -> Vec<ProcessStep> {
    SiteContent::bundled().process.clone()
}

fn bundled_contact() -> Vec<ContactLink> {
    SiteContent::bundled().contact.clone()
}
