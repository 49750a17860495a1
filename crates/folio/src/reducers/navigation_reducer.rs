//! Navigation Reducer
//!
//! Tab switching and scrolling inside content tabs.

use crate::actions::NavigationAction;
use crate::state::AppState;
use crate::view_models::SectionViewModel;

pub fn reduce(mut state: AppState, action: &NavigationAction) -> AppState {
    match action {
        NavigationAction::NextSection => {
            state.section = state.section.next();
            state.scroll = 0;
        }

        NavigationAction::PreviousSection => {
            state.section = state.section.previous();
            state.scroll = 0;
        }

        NavigationAction::ScrollDown => {
            if state.scroll < max_scroll(&state) {
                state.scroll += 1;
            }
        }

        NavigationAction::ScrollUp => {
            state.scroll = state.scroll.saturating_sub(1);
        }
    }
    state
}

/// Keeps at least the last content line on screen
fn max_scroll(state: &AppState) -> u16 {
    let lines = SectionViewModel::for_section(state.section, &state.config.content)
        .map_or(0, |vm| vm.lines.len());
    u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Section;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_switching_section_resets_scroll() {
        let mut state = AppState {
            section: Section::Skills,
            scroll: 4,
            ..AppState::default()
        };

        state = reduce(state, &NavigationAction::NextSection);
        assert_eq!(state.section, Section::Certifications);
        assert_eq!(state.scroll, 0);

        state.scroll = 2;
        state = reduce(state, &NavigationAction::PreviousSection);
        assert_eq!(state.section, Section::Skills);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = AppState {
            section: Section::Contact,
            ..AppState::default()
        };
        let links = state.config.content.contact.len();

        for _ in 0..links + 10 {
            state = reduce(state, &NavigationAction::ScrollDown);
        }
        assert_eq!(usize::from(state.scroll), links - 1);

        for _ in 0..links + 10 {
            state = reduce(state, &NavigationAction::ScrollUp);
        }
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_projects_tab_does_not_scroll() {
        let state = reduce(AppState::default(), &NavigationAction::ScrollDown);
        assert_eq!(state.scroll, 0);
    }
}
