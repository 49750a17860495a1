//! View model for the Projects section
//!
//! Decides what the section shows for each load state and pre-formats
//! every card, so the view only lays things out.

use crate::domain_models::LoadState;
use crate::state::ProjectsState;
use chrono::{DateTime, Utc};
use gh_client::RepositorySummary;

/// Placeholder cards shown while loading
pub const SKELETON_COUNT: usize = 6;

pub const HEADING: &str = "Projects";
pub const SUBTITLE: &str = "Explore the collection of independent creations and experiments";
pub const ERROR_HEADLINE: &str = "Unable to load projects at this time.";
pub const EMPTY_MESSAGE: &str = "No projects found.";
const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsViewModel {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub body: ProjectsBody,
}

/// What the section body renders; exactly one of these at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsBody {
    Skeletons { count: usize, frame: usize },
    Failure { headline: &'static str, detail: String },
    Empty { message: &'static str },
    Cards { cards: Vec<ProjectCardViewModel>, selected: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardViewModel {
    pub name: String,
    pub description: String,
    /// "Updated Jan 5, 2024"
    pub updated: String,
    pub url: String,
    pub is_selected: bool,
}

impl ProjectsViewModel {
    pub fn from_state(state: &ProjectsState, animation_frame: usize) -> Self {
        let body = match &state.load_state {
            LoadState::Loading => ProjectsBody::Skeletons {
                count: SKELETON_COUNT,
                frame: animation_frame,
            },
            LoadState::Error { detail } => ProjectsBody::Failure {
                headline: ERROR_HEADLINE,
                detail: detail.clone(),
            },
            LoadState::Ready(list) if list.is_empty() => ProjectsBody::Empty {
                message: EMPTY_MESSAGE,
            },
            LoadState::Ready(list) => ProjectsBody::Cards {
                cards: list
                    .as_slice()
                    .iter()
                    .enumerate()
                    .map(|(index, repo)| {
                        ProjectCardViewModel::from_repository(repo, index == state.selected)
                    })
                    .collect(),
                selected: state.selected,
            },
        };

        Self {
            heading: HEADING,
            subtitle: SUBTITLE,
            body,
        }
    }
}

impl ProjectCardViewModel {
    fn from_repository(repo: &RepositorySummary, is_selected: bool) -> Self {
        let description = repo
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        Self {
            name: repo.name.clone(),
            description,
            updated: format!("Updated {}", format_date(&repo.updated_at)),
            url: repo.html_url.clone(),
            is_selected,
        }
    }
}

/// "Jan 5, 2024"
fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
