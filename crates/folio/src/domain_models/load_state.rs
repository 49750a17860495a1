//! Projects listing model
//!
//! [`ProjectList`] can only be built from a raw listing through
//! [`ProjectList::from_listing`], so a `Ready` state always holds
//! non-fork repositories, most recently updated first.

use gh_client::{ClientError, RepositorySummary};

/// Curated repositories, ready to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectList(Vec<RepositorySummary>);

impl ProjectList {
    /// Drop forks and sort by `updated_at`, newest first
    pub fn from_listing(listing: Vec<RepositorySummary>) -> Self {
        let mut repos: Vec<RepositorySummary> =
            listing.into_iter().filter(|repo| !repo.is_fork).collect();
        // Stable: equal timestamps keep the API order
        repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Self(repos)
    }

    pub fn as_slice(&self) -> &[RepositorySummary] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RepositorySummary> {
        self.0.get(index)
    }
}

/// Loading state of the Projects section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Request in flight (the state at mount)
    #[default]
    Loading,
    /// Request failed; `detail` is the raw error text
    Error { detail: String },
    Ready(ProjectList),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<RepositorySummary>, ClientError>) -> Self {
        match result {
            Ok(listing) => Self::Ready(ProjectList::from_listing(listing)),
            Err(e) => Self::Error {
                detail: e.to_string(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Leave `Loading` for `outcome`. Settled states never change again.
    pub fn settle(self, outcome: LoadState) -> LoadState {
        if !self.is_loading() {
            log::warn!("Projects listing already settled, ignoring outcome");
            return self;
        }
        if outcome.is_loading() {
            log::warn!("Ignoring settle to Loading");
            return self;
        }
        outcome
    }

    /// Items of a `Ready` state
    pub fn projects(&self) -> Option<&ProjectList> {
        match self {
            Self::Ready(list) => Some(list),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn repo(id: u64, fork: bool, updated_at: &str) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{id}"),
            description: None,
            html_url: format!("https://github.com/davianspace/repo-{id}"),
            updated_at: updated_at.parse::<DateTime<Utc>>().unwrap(),
            is_fork: fork,
        }
    }

    fn ids(list: &ProjectList) -> Vec<u64> {
        list.as_slice().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_forks_are_dropped() {
        let list = ProjectList::from_listing(vec![
            repo(1, true, "2024-01-01T00:00:00Z"),
            repo(2, false, "2024-01-02T00:00:00Z"),
            repo(3, true, "2024-01-03T00:00:00Z"),
        ]);
        assert!(list.as_slice().iter().all(|r| !r.is_fork));
        assert_eq!(ids(&list), vec![2]);
    }

    #[test]
    fn test_newest_first() {
        let list = ProjectList::from_listing(vec![
            repo(1, false, "2024-01-01T00:00:00Z"),
            repo(2, false, "2024-02-01T00:00:00Z"),
            repo(3, false, "2024-03-01T00:00:00Z"),
        ]);
        assert_eq!(ids(&list), vec![3, 2, 1]);
    }

    #[test]
    fn test_mixed_listing() {
        let list = ProjectList::from_listing(vec![
            repo(1, false, "2024-01-01T00:00:00Z"),
            repo(2, true, "2024-06-01T00:00:00Z"),
            repo(3, false, "2024-03-01T00:00:00Z"),
        ]);
        assert_eq!(ids(&list), vec![3, 1]);
    }

    #[test]
    fn test_only_forks_is_empty() {
        let list = ProjectList::from_listing(vec![repo(1, true, "2024-01-01T00:00:00Z")]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_from_result() {
        let ready = LoadState::from_result(Ok(vec![]));
        assert_eq!(ready, LoadState::Ready(ProjectList::default()));

        let failed = LoadState::from_result(Err(ClientError::Status {
            status: 500,
            message: "Server Error".to_string(),
        }));
        assert_eq!(
            failed,
            LoadState::Error {
                detail: "HTTP 500: Server Error".to_string()
            }
        );
    }

    #[test]
    fn test_settle_is_one_directional() {
        let ready = LoadState::Loading.settle(LoadState::Ready(ProjectList::default()));
        assert!(ready.projects().is_some());

        // A second outcome does not replace the first
        let still_ready = ready.clone().settle(LoadState::Error {
            detail: "late".to_string(),
        });
        assert_eq!(still_ready, ready);

        // Nothing goes back to Loading
        assert_eq!(ready.clone().settle(LoadState::Loading), ready);
        assert!(LoadState::Loading.settle(LoadState::Loading).is_loading());
    }
}
