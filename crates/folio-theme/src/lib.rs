//! Theme handling for folio
//!
//! - [`ThemePreference`] - the persisted light/dark choice
//! - [`ThemeResolver`] - resolves, toggles and persists the preference
//! - [`Theme`] - the palette the views render with

mod appearance;
mod palette;
mod preference;
mod resolver;

pub use appearance::TerminalAppearance;
pub use palette::Theme;
pub use preference::{ParsePreferenceError, ThemePreference};
pub use resolver::{
    PreferenceStore, StorageError, SystemAppearance, ThemeResolver, THEME_STORAGE_KEY,
};
