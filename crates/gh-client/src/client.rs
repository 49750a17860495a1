use crate::error::ClientError;
use crate::models::RepositorySummary;
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Largest page GitHub serves; only a single page is ever requested
pub const MAX_PAGE_SIZE: u8 = 100;

/// Lists the repositories of a GitHub organization
#[async_trait]
pub trait RepositoryLister: Send + Sync {
    /// One read of the first page, most recently updated first
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<RepositorySummary>, ClientError>;
}

#[derive(Serialize)]
struct ListParams {
    sort: &'static str,
    per_page: u8,
}

/// [`RepositoryLister`] backed by octocrab
#[derive(Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client from `GITHUB_TOKEN`, `GH_TOKEN` or `gh auth token`
    ///
    /// Falls back to an anonymous client, which is enough for public
    /// listings (at a lower rate limit). Must run inside a Tokio runtime.
    pub async fn from_env() -> anyhow::Result<Self> {
        let token = discover_token();
        match &token {
            Some(_) => log::debug!("Using authenticated GitHub client"),
            None => log::info!("No GitHub token found, using anonymous client"),
        }
        Self::build(token, None)
    }

    /// Every listing is a single request: octocrab's retry layer is switched off
    fn build(token: Option<String>, base_uri: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri)?;
        }

        Ok(Self::new(Arc::new(builder.build()?)))
    }
}

#[async_trait]
impl RepositoryLister for OctocrabClient {
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<RepositorySummary>, ClientError> {
        let params = ListParams {
            sort: "updated",
            per_page: MAX_PAGE_SIZE,
        };

        log::debug!("GET /orgs/{}/repos", org);
        let repos: Vec<RepositorySummary> = self
            .octocrab
            .get(format!("/orgs/{org}/repos"), Some(&params))
            .await?;

        log::debug!("Listed {} repositories for {}", repos.len(), org);
        Ok(repos)
    }
}

fn discover_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN")
        .or_else(|_| std::env::var("GH_TOKEN"))
        .ok()
        .filter(|token| !token.trim().is_empty())
        .or_else(|| {
            log::debug!("No GITHUB_TOKEN/GH_TOKEN found, trying gh auth token");
            std::process::Command::new("gh")
                .args(["auth", "token"])
                .output()
                .ok()
                .filter(|output| output.status.success())
                .and_then(|output| String::from_utf8(output.stdout).ok())
                .map(|s| s.trim().to_string())
                .filter(|token| !token.is_empty())
        })
}
