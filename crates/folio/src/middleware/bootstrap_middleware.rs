//! Bootstrap Middleware
//!
//! Manages application startup sequence:
//! - Starts tick thread for the loading animation on BootstrapStart
//! - Dispatches BootstrapEnd once the projects listing settles
//! - Stops tick thread on BootstrapEnd

use crate::actions::{Action, BootstrapAction, GlobalAction, ProjectsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(200);

/// Bootstrap middleware - manages application startup and tick generation
pub struct BootstrapMiddleware {
    ticking: Arc<AtomicBool>,
}

impl BootstrapMiddleware {
    pub fn new() -> Self {
        Self {
            ticking: Arc::new(AtomicBool::new(false)),
        }
    }

    fn start_ticking(&self, dispatcher: &Dispatcher) {
        if self.ticking.swap(true, Ordering::SeqCst) {
            return;
        }

        let dispatcher = dispatcher.clone();
        let ticking = self.ticking.clone();

        thread::spawn(move || {
            while ticking.load(Ordering::SeqCst) {
                thread::sleep(TICK_RATE);
                dispatcher.dispatch(Action::Global(GlobalAction::Tick));
            }
            log::debug!("Bootstrap: Tick thread terminating");
        });

        log::debug!("Bootstrap: Tick thread started");
    }
}

impl Default for BootstrapMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for BootstrapMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                log::info!("BootstrapMiddleware: Bootstrap starting");
                self.start_ticking(dispatcher);
            }

            Action::Projects(ProjectsAction::Settled(_)) => {
                log::info!("BootstrapMiddleware: Projects settled, ending bootstrap");
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::End));
            }

            Action::Bootstrap(BootstrapAction::End) => {
                self.ticking.store(false, Ordering::SeqCst);
                log::info!("BootstrapMiddleware: Bootstrap ended, stopping tick thread");
            }

            _ => {}
        }

        // All actions pass through
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::LoadState;

    #[test]
    fn test_settled_ends_bootstrap() {
        let mut middleware = BootstrapMiddleware::new();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();

        let action = Action::Projects(ProjectsAction::Settled(LoadState::Error {
            detail: "offline".to_string(),
        }));
        assert!(middleware.handle(&action, &state, &dispatcher));
        assert_eq!(
            dispatcher.pop(),
            Some(Action::Bootstrap(BootstrapAction::End))
        );
    }

    #[test]
    fn test_tick_thread_stops_on_end() {
        let mut middleware = BootstrapMiddleware::new();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();

        middleware.handle(&Action::Bootstrap(BootstrapAction::Start), &state, &dispatcher);
        assert!(middleware.ticking.load(Ordering::SeqCst));

        middleware.handle(&Action::Bootstrap(BootstrapAction::End), &state, &dispatcher);
        assert!(!middleware.ticking.load(Ordering::SeqCst));
    }
}
