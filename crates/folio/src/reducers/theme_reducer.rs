use crate::actions::ThemeAction;
use crate::state::AppState;

/// Switch the palette once a preference has been persisted
pub fn reduce(mut state: AppState, action: &ThemeAction) -> AppState {
    match action {
        ThemeAction::Toggle => {
            // Side effect handled by middleware
        }
        ThemeAction::Applied(preference, theme) => {
            log::debug!("Switching palette to {}", preference);
            state.theme_preference = *preference;
            state.theme = theme.clone();
        }
    }
    state
}
