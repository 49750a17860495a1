//! Bootstrap actions
//!
//! Actions for application initialization and configuration loading.

/// Actions for application bootstrap/initialization
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapAction {
    /// Bootstrap process started
    Start,
    /// Bootstrap process completed (the projects listing has settled)
    End,
    /// Application configuration loaded
    ConfigLoaded(folio_config::AppConfig),
}
