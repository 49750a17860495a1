use folio_theme::{Theme, ThemePreference};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeAction {
    /// Switch to the opposite preference
    Toggle,
    /// Preference was persisted; switch the palette
    Applied(ThemePreference, Theme),
}
