//! App Config Middleware
//!
//! Reads folio.toml once on BootstrapStart. The org it names drives the
//! projects listing and its tables fill the content tabs.

use crate::actions::{Action, BootstrapAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use folio_config::AppConfig;

pub struct AppConfigMiddleware {
    loader: fn() -> AppConfig,
    loaded: bool,
}

impl AppConfigMiddleware {
    pub fn new() -> Self {
        Self::with_loader(AppConfig::load)
    }

    fn with_loader(loader: fn() -> AppConfig) -> Self {
        Self {
            loader,
            loaded: false,
        }
    }
}

impl Default for AppConfigMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for AppConfigMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) if !self.loaded => {
                self.loaded = true;
                let config = (self.loader)();
                let content = &config.content;
                log::info!(
                    "AppConfigMiddleware: {} for github.com/{} ({} apps, {} skill groups, {} certifications)",
                    config.site_name,
                    config.github_org,
                    content.featured_apps.len(),
                    content.skills.len(),
                    content.certifications.len(),
                );
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::ConfigLoaded(config)));
                true
            }
            _ => true,
        }
    }
}
