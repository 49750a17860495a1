//! Configuration and file management for folio
//!
//! - [`AppConfig`] - site identity and the GitHub organization to list
//! - [`SiteContent`] - the About, Apps, Skills, Certifications, Process and Contact text
//! - [`PreferenceFile`] - TOML key-value file backing the theme preference

mod app_config;
mod preference_file;
mod site_content;

pub use app_config::AppConfig;
pub use preference_file::PreferenceFile;
pub use site_content::{
    Certification, ContactLink, FeaturedApp, Organization, Personal, ProcessStep, SiteContent,
    SkillCategory, Technology,
};

use std::path::PathBuf;

const APP_DIR: &str = "folio";
const CONFIG_FILE: &str = "folio.toml";

/// Per-user configuration directory (`~/.config/folio` on Linux)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Per-user cache directory, used for the log file
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Read the config file from CWD first, then the config directory
pub fn load_config_file() -> Option<String> {
    let candidates = std::iter::once(PathBuf::from(CONFIG_FILE))
        .chain(config_dir().map(|dir| dir.join(CONFIG_FILE)));

    for path in candidates {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Found config file at {}", path.display());
                return Some(content);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Cannot read {}: {}", path.display(), e),
        }
    }

    None
}
