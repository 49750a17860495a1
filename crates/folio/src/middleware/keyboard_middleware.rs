use crate::actions::{Action, GlobalAction, NavigationAction, ProjectsAction, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Section};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
#[derive(Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            if let Some(action) = action_for_key(key, state.section) {
                dispatcher.dispatch(action);
            } else {
                log::trace!("Unhandled key: {:?}", key);
            }
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// Map a key event to the semantic action it triggers in `section`
///
/// Up/down move the card cursor on the Projects tab and scroll elsewhere.
fn action_for_key(key: &KeyEvent, section: Section) -> Option<Action> {
    let on_projects = section == Section::Projects;
    let plain = key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT;

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::Global(GlobalAction::Quit)
        }
        KeyCode::Char('q') if plain => Action::Global(GlobalAction::Quit),
        KeyCode::Esc => Action::Global(GlobalAction::Quit),

        KeyCode::Char('t') if plain => Action::Theme(ThemeAction::Toggle),

        // Some terminals send BackTab, others Tab with SHIFT
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Action::Navigation(NavigationAction::PreviousSection)
        }
        KeyCode::BackTab | KeyCode::Left => Action::Navigation(NavigationAction::PreviousSection),
        KeyCode::Tab | KeyCode::Right => Action::Navigation(NavigationAction::NextSection),
        KeyCode::Char('l') if plain => Action::Navigation(NavigationAction::NextSection),
        KeyCode::Char('h') if plain => Action::Navigation(NavigationAction::PreviousSection),

        KeyCode::Char('j') | KeyCode::Down if plain => {
            if on_projects {
                Action::Projects(ProjectsAction::SelectNext)
            } else {
                Action::Navigation(NavigationAction::ScrollDown)
            }
        }
        KeyCode::Char('k') | KeyCode::Up if plain => {
            if on_projects {
                Action::Projects(ProjectsAction::SelectPrevious)
            } else {
                Action::Navigation(NavigationAction::ScrollUp)
            }
        }

        KeyCode::Enter if on_projects => Action::Projects(ProjectsAction::OpenSelected),

        _ => return None,
    };

    Some(action)
}
