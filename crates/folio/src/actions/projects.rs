//! Actions for the Projects section.

use crate::domain_models::LoadState;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsAction {
    /// The section mounted; list the organization's repositories
    Load { org: String },
    /// The listing request finished (never carries `Loading`)
    Settled(LoadState),
    SelectNext,
    SelectPrevious,
    /// Open the selected project in the browser
    OpenSelected,
}
