//! Projects Reducer
//!
//! Handles the listing's load state and the card cursor.

use crate::actions::ProjectsAction;
use crate::state::ProjectsState;

pub fn reduce(mut state: ProjectsState, action: &ProjectsAction) -> ProjectsState {
    match action {
        ProjectsAction::Load { .. } | ProjectsAction::OpenSelected => {
            // Side effect handled by middleware
        }

        ProjectsAction::Settled(outcome) => {
            state.load_state = state.load_state.settle(outcome.clone());
            state.selected = 0;
        }

        ProjectsAction::SelectNext => {
            let count = card_count(&state);
            if count > 0 {
                state.selected = (state.selected + 1).min(count - 1);
            }
        }

        ProjectsAction::SelectPrevious => {
            state.selected = state.selected.saturating_sub(1);
        }
    }
    state
}

fn card_count(state: &ProjectsState) -> usize {
    state.load_state.projects().map_or(0, |list| list.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{LoadState, ProjectList};
    use gh_client::RepositorySummary;

    fn ready(count: u64) -> ProjectsState {
        let listing = (1..=count)
            .map(|id| RepositorySummary {
                id,
                name: format!("repo-{id}"),
                description: None,
                html_url: format!("https://github.com/davianspace/repo-{id}"),
                updated_at: chrono::Utc::now(),
                is_fork: false,
            })
            .collect();
        reduce(
            ProjectsState::default(),
            &ProjectsAction::Settled(LoadState::Ready(ProjectList::from_listing(listing))),
        )
    }

    #[test]
    fn test_starts_loading() {
        assert!(ProjectsState::default().load_state.is_loading());
    }

    #[test]
    fn test_settles_once() {
        let state = reduce(
            ProjectsState::default(),
            &ProjectsAction::Settled(LoadState::Error {
                detail: "HTTP 403: rate limited".to_string(),
            }),
        );
        let state = reduce(
            state,
            &ProjectsAction::Settled(LoadState::Ready(ProjectList::default())),
        );
        assert_eq!(
            state.load_state,
            LoadState::Error {
                detail: "HTTP 403: rate limited".to_string()
            }
        );
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = ready(3);
        for _ in 0..5 {
            state = reduce(state, &ProjectsAction::SelectNext);
        }
        assert_eq!(state.selected, 2);

        for _ in 0..5 {
            state = reduce(state, &ProjectsAction::SelectPrevious);
        }
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_no_selection_while_loading() {
        let state = reduce(ProjectsState::default(), &ProjectsAction::SelectNext);
        assert_eq!(state.selected, 0);
    }
}
