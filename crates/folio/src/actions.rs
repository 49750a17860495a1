//! Actions represent all possible state changes in the application.
//!
//! Actions are grouped by scope to indicate which part of the app they affect.

mod bootstrap;
mod navigation;
mod projects;
mod theme;

pub use bootstrap::BootstrapAction;
pub use navigation::NavigationAction;
pub use projects::ProjectsAction;
pub use theme::ThemeAction;

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Global(GlobalAction),
    Bootstrap(BootstrapAction),
    Theme(ThemeAction),
    Navigation(NavigationAction),
    Projects(ProjectsAction),
}

/// Actions not tied to any section
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    Quit,
    /// Periodic tick for the loading animation
    Tick,
}
