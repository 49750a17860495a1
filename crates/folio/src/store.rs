//! Store
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Middleware runs in registration order; any middleware returning `false`
//! consumes the action before it reaches the reducer.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer;
use crate::state::AppState;

pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run an action through the middleware chain and the reducer
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = app_reducer::reduce(state, &action);
    }
}
