//! Projects Middleware
//!
//! Handles side effects for the Projects section:
//! - Initializes the GitHub client on BootstrapStart
//! - Requests the listing once the config (and so the org) is known
//! - Runs exactly one listing request per lifetime, no retry
//! - Opens the selected project in the browser

use crate::actions::{Action, BootstrapAction, ProjectsAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::LoadState;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_client::{OctocrabClient, RepositoryLister};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for loading the organization's repositories
pub struct ProjectsMiddleware {
    /// Tokio runtime for the listing request
    runtime: Runtime,
    /// GitHub client (initialized on BootstrapStart unless injected)
    lister: Option<Arc<dyn RepositoryLister>>,
    /// Set once the single listing request has been issued
    requested: bool,
}

impl ProjectsMiddleware {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
            lister: None,
            requested: false,
        })
    }

    #[cfg(test)]
    pub fn with_lister(lister: Arc<dyn RepositoryLister>) -> std::io::Result<Self> {
        let mut middleware = Self::new()?;
        middleware.lister = Some(lister);
        Ok(middleware)
    }

    fn initialize_client(&mut self) {
        match self.runtime.block_on(OctocrabClient::from_env()) {
            Ok(client) => {
                log::info!("ProjectsMiddleware: GitHub client initialized");
                self.lister = Some(Arc::new(client));
            }
            Err(e) => {
                log::warn!("ProjectsMiddleware: GitHub client not initialized: {}", e);
            }
        }
    }

    fn start_load(&mut self, org: &str, dispatcher: &Dispatcher) {
        if self.requested {
            log::debug!("ProjectsMiddleware: Listing already requested, ignoring");
            return;
        }
        self.requested = true;

        let Some(lister) = self.lister.clone() else {
            log::error!("ProjectsMiddleware: GitHub client not initialized");
            dispatcher.dispatch(Action::Projects(ProjectsAction::Settled(LoadState::Error {
                detail: "GitHub client not initialized".to_string(),
            })));
            return;
        };

        let org = org.to_string();
        let dispatcher = dispatcher.clone();

        log::info!("Spawning async task to list repositories of {}", org);
        self.runtime.spawn(async move {
            let outcome = load_projects(lister.as_ref(), &org).await;
            dispatcher.dispatch(Action::Projects(ProjectsAction::Settled(outcome)));
        });
    }
}

impl Middleware for ProjectsMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if self.lister.is_none() {
                    self.initialize_client();
                }
                true
            }

            // The section mounts once the org is known
            Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
                dispatcher.dispatch(Action::Projects(ProjectsAction::Load {
                    org: config.github_org.clone(),
                }));
                true
            }

            Action::Projects(ProjectsAction::Load { org }) => {
                let first = !self.requested;
                self.start_load(org, dispatcher);
                first
            }

            Action::Projects(ProjectsAction::OpenSelected) => {
                let selected = state
                    .projects
                    .load_state
                    .projects()
                    .and_then(|list| list.get(state.projects.selected));

                match selected {
                    Some(repo) => {
                        log::info!("Opening {} in browser: {}", repo.name, repo.html_url);
                        if let Err(e) = open::that(&repo.html_url) {
                            log::error!("Failed to open URL in browser: {}", e);
                        }
                    }
                    None => log::debug!("No project selected to open"),
                }
                false // Consume action
            }

            _ => true, // Pass through all other actions
        }
    }
}

/// List `org`'s repositories and curate them into a settled [`LoadState`]
pub async fn load_projects(lister: &dyn RepositoryLister, org: &str) -> LoadState {
    log::info!("Loading projects for {}", org);
    let result = lister.list_org_repositories(org).await;

    match &result {
        Ok(listing) => log::info!("Listed {} repositories for {}", listing.len(), org),
        Err(e) => log::error!("Failed to list repositories for {}: {}", org, e),
    }

    LoadState::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gh_client::{ClientError, RepositorySummary};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    fn repo(id: u64, fork: bool, updated_at: &str) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{id}"),
            description: Some("A project".to_string()),
            html_url: format!("https://github.com/davianspace/repo-{id}"),
            updated_at: updated_at.parse().unwrap(),
            is_fork: fork,
        }
    }

    struct Canned {
        result: Result<Vec<RepositorySummary>, ClientError>,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(result: Result<Vec<RepositorySummary>, ClientError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl RepositoryLister for Canned {
        async fn list_org_repositories(
            &self,
            _org: &str,
        ) -> Result<Vec<RepositorySummary>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn wait_for_action(dispatcher: &Dispatcher) -> Option<Action> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(action) = dispatcher.pop() {
                return Some(action);
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[tokio::test]
    async fn test_load_filters_and_sorts() {
        let lister = Canned::new(Ok(vec![
            repo(1, false, "2024-01-01T00:00:00Z"),
            repo(2, true, "2024-06-01T00:00:00Z"),
            repo(3, false, "2024-03-01T00:00:00Z"),
        ]));

        let state = load_projects(lister.as_ref(), "davianspace").await;
        let ids: Vec<u64> = state
            .projects()
            .unwrap()
            .as_slice()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn test_load_non_success_status() {
        let lister = Canned::new(Err(ClientError::Status {
            status: 404,
            message: "Not Found".to_string(),
        }));

        let state = load_projects(lister.as_ref(), "nobody").await;
        match state {
            LoadState::Error { detail } => assert_eq!(detail, "HTTP 404: Not Found"),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_empty_listing() {
        let lister = Canned::new(Ok(vec![]));
        let state = load_projects(lister.as_ref(), "davianspace").await;
        assert!(state.projects().unwrap().is_empty());
    }

    #[test]
    fn test_config_loaded_requests_listing() {
        let lister = Canned::new(Ok(vec![]));
        let mut mw = ProjectsMiddleware::with_lister(lister).unwrap();
        let dispatcher = Dispatcher::new();

        let config = folio_config::AppConfig::default();
        mw.handle(
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(config)),
            &AppState::default(),
            &dispatcher,
        );

        assert_eq!(
            dispatcher.pop(),
            Some(Action::Projects(ProjectsAction::Load {
                org: "davianspace".to_string()
            }))
        );
    }

    #[test]
    fn test_requests_exactly_once() {
        let lister = Canned::new(Ok(vec![repo(1, false, "2024-01-01T00:00:00Z")]));
        let mut mw = ProjectsMiddleware::with_lister(lister.clone()).unwrap();
        let dispatcher = Dispatcher::new();
        let state = AppState::default();
        let load = Action::Projects(ProjectsAction::Load {
            org: "davianspace".to_string(),
        });

        assert!(mw.handle(&load, &state, &dispatcher));
        assert!(!mw.handle(&load, &state, &dispatcher));

        match wait_for_action(&dispatcher) {
            Some(Action::Projects(ProjectsAction::Settled(LoadState::Ready(list)))) => {
                assert_eq!(list.len(), 1)
            }
            other => panic!("expected Settled(Ready), got {other:?}"),
        }
        assert_eq!(lister.calls.load(Ordering::SeqCst), 1);
        assert_eq!(dispatcher.pop(), None);
    }

    #[test]
    fn test_missing_client_settles_with_error() {
        let mut mw = ProjectsMiddleware::new().unwrap();
        let dispatcher = Dispatcher::new();

        mw.handle(
            &Action::Projects(ProjectsAction::Load {
                org: "davianspace".to_string(),
            }),
            &AppState::default(),
            &dispatcher,
        );

        assert_eq!(
            dispatcher.pop(),
            Some(Action::Projects(ProjectsAction::Settled(LoadState::Error {
                detail: "GitHub client not initialized".to_string()
            })))
        );
    }

    #[test]
    fn test_open_selected_is_consumed_without_projects() {
        let mut mw = ProjectsMiddleware::new().unwrap();
        let dispatcher = Dispatcher::new();

        // Still loading, nothing to open
        assert!(!mw.handle(
            &Action::Projects(ProjectsAction::OpenSelected),
            &AppState::default(),
            &dispatcher,
        ));
    }
}
