//! Theme Resolver
//!
//! Resolves the display preference once at startup:
//!
//! ```text
//! stored value → system color scheme → Dark
//! ```
//!
//! Every change (including the initial resolution) goes through
//! [`ThemeResolver::apply_and_persist`] so the stored and the displayed
//! preference never diverge.

use crate::palette::Theme;
use crate::preference::ThemePreference;

/// Key the preference is stored under
pub const THEME_STORAGE_KEY: &str = "davian-space-theme";

/// Errors raised by a [`PreferenceStore`]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage location exists on this host
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference storage is corrupt: {0}")]
    Corrupt(String),
}

/// Persistent key-value storage for preferences
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Host-level light/dark signal
pub trait SystemAppearance: Send {
    /// `None` when the host does not report a preference
    fn prefers_dark(&self) -> Option<bool>;
}

/// Resolves, persists and applies the [`ThemePreference`]
pub struct ThemeResolver {
    store: Box<dyn PreferenceStore>,
    appearance: Box<dyn SystemAppearance>,
}

impl ThemeResolver {
    pub fn new(store: Box<dyn PreferenceStore>, appearance: Box<dyn SystemAppearance>) -> Self {
        Self { store, appearance }
    }

    /// Resolve the preference to start with. Never fails.
    pub fn initialize(&self) -> ThemePreference {
        if let Some(stored) = self.stored_preference() {
            log::info!("ThemeResolver: Using stored preference '{}'", stored);
            return stored;
        }

        match self.appearance.prefers_dark() {
            Some(true) => {
                log::info!("ThemeResolver: System prefers dark");
                ThemePreference::Dark
            }
            Some(false) => {
                log::info!("ThemeResolver: System prefers light");
                ThemePreference::Light
            }
            None => {
                log::info!("ThemeResolver: No system preference, falling back to dark");
                ThemePreference::default()
            }
        }
    }

    /// Persist `preference` and return the palette to display
    pub fn apply_and_persist(&mut self, preference: ThemePreference) -> Theme {
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, preference.as_str()) {
            log::warn!("ThemeResolver: Failed to persist '{}': {}", preference, e);
        } else {
            log::debug!("ThemeResolver: Persisted '{}'", preference);
        }
        Theme::for_preference(preference)
    }

    fn stored_preference(&self) -> Option<ThemePreference> {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => match value.parse() {
                Ok(preference) => Some(preference),
                Err(e) => {
                    log::warn!("ThemeResolver: Ignoring stored value: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("ThemeResolver: Cannot read stored preference: {}", e);
                None
            }
        }
    }
}
