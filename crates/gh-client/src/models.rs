//! Repository model
//!
//! The subset of GitHub's repository JSON the projects listing needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the organization listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the repository on github.com
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "fork")]
    pub is_fork: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_listing_item() {
        // Trimmed from a real /orgs/{org}/repos response
        let json = r#"{
            "id": 1296269,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "private": false,
            "description": "This your first repo!",
            "fork": false,
            "html_url": "https://github.com/octocat/Hello-World",
            "stargazers_count": 80,
            "updated_at": "2011-01-26T19:14:43Z"
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.description.as_deref(), Some("This your first repo!"));
        assert_eq!(repo.html_url, "https://github.com/octocat/Hello-World");
        assert_eq!(repo.updated_at.to_rfc3339(), "2011-01-26T19:14:43+00:00");
        assert!(!repo.is_fork);
    }

    #[test]
    fn test_null_description() {
        let json = r#"{
            "id": 7,
            "name": "dotfiles",
            "description": null,
            "fork": true,
            "html_url": "https://github.com/davianspace/dotfiles",
            "updated_at": "2024-06-01T00:00:00Z"
        }"#;

        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.description, None);
        assert!(repo.is_fork);
    }
}
