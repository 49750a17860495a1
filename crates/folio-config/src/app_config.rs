//! Application configuration
//!
//! Configuration loaded from folio.toml file.

use crate::site_content::SiteContent;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from folio.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GitHub organization whose repositories are listed
    #[serde(default = "default_github_org")]
    pub github_org: String,

    /// Name shown in the navbar, hero banner and footer
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Section tables (`[personal]`, `[[skills]]`, ...) at the top level
    #[serde(flatten)]
    pub content: SiteContent,
}

fn default_github_org() -> String {
    "davianspace".to_string()
}

fn default_site_name() -> String {
    "Davian Space".to_string()
}

fn default_tagline() -> String {
    "A quiet orbit of ideas and creations".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            github_org: default_github_org(),
            site_name: default_site_name(),
            tagline: default_tagline(),
            content: SiteContent::bundled().clone(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Footer copyright line for the given year
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.site_name)
    }

    /// Footer copyright line for the current year
    pub fn current_copyright(&self) -> String {
        self.copyright(chrono::Local::now().year())
    }
}
