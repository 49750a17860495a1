//! Theme Middleware
//!
//! - Resolves the preference once on BootstrapStart
//! - Turns Toggle into the opposite of the last applied preference
//! - Persists every change before the reducer switches the palette

use crate::actions::{Action, BootstrapAction, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use folio_theme::{ThemePreference, ThemeResolver};

pub struct ThemeMiddleware {
    resolver: ThemeResolver,
    initialized: bool,
    /// Last preference applied; may be ahead of the state while Applied is queued
    current: ThemePreference,
}

impl ThemeMiddleware {
    pub fn new(resolver: ThemeResolver) -> Self {
        Self {
            resolver,
            initialized: false,
            current: ThemePreference::default(),
        }
    }

    fn apply(&mut self, preference: ThemePreference, dispatcher: &Dispatcher) {
        self.current = preference;
        let theme = self.resolver.apply_and_persist(preference);
        dispatcher.dispatch(Action::Theme(ThemeAction::Applied(preference, theme)));
    }
}

impl Middleware for ThemeMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if !self.initialized {
                    let preference = self.resolver.initialize();
                    log::info!("ThemeMiddleware: Starting with {} theme", preference);
                    self.apply(preference, dispatcher);
                    self.initialized = true;
                }
                true
            }

            Action::Theme(ThemeAction::Toggle) => {
                let next = self.current.toggle();
                log::info!("ThemeMiddleware: Switching to {} theme", next);
                self.apply(next, dispatcher);
                false // Consume action
            }

            _ => true,
        }
    }
}
