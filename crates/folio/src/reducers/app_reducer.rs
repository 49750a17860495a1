use crate::actions::{Action, BootstrapAction, GlobalAction};
use crate::reducers::{navigation_reducer, projects_reducer, theme_reducer};
use crate::state::AppState;
use crate::utils::banner::render_banner;

/// Reducer - pure function that produces new state from current state + action
///
/// This is the root reducer: it handles global and bootstrap actions and
/// delegates section actions to the sub-reducers.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }

        Action::Global(GlobalAction::Tick) => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
        }

        Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
            state.hero_banner = render_banner(&config.site_name);
            state.config = config.clone();
            log::info!("App config loaded into state");
        }

        Action::Theme(theme_action) => {
            state = theme_reducer::reduce(state, theme_action);
        }

        Action::Navigation(navigation_action) => {
            state = navigation_reducer::reduce(state, navigation_action);
        }

        Action::Projects(projects_action) => {
            state.projects = projects_reducer::reduce(state.projects, projects_action);
        }

        Action::Global(GlobalAction::KeyPressed(_))
        | Action::Bootstrap(BootstrapAction::Start)
        | Action::Bootstrap(BootstrapAction::End) => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::AppConfig;

    #[test]
    fn test_quit() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_tick_advances_animation() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Tick));
        let state = reduce(state, &Action::Global(GlobalAction::Tick));
        assert_eq!(state.animation_frame, 2);
    }

    #[test]
    fn test_config_loaded() {
        let config = AppConfig {
            site_name: "Orbit".to_string(),
            ..AppConfig::default()
        };
        let state = reduce(
            AppState::default(),
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(config.clone())),
        );
        assert_eq!(state.config, config);
        assert!(!state.hero_banner.is_empty());
    }
}
