//! Middleware sits between action dispatch and reducer execution.
//!
//! Each middleware can inspect actions and state, dispatch new actions,
//! perform side effects, and consume an action by returning `false`.

pub mod app_config_middleware;
pub mod bootstrap_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod projects_middleware;
pub mod theme_middleware;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub trait Middleware {
    /// Returns `true` to pass the action on, `false` to consume it
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
