//! GitHub client for listing organization repositories
//!
//! [`RepositoryLister`] is the seam the application loads through;
//! [`OctocrabClient`] is the implementation backed by the GitHub REST API.

mod client;
mod error;
mod models;

pub use client::{OctocrabClient, RepositoryLister, MAX_PAGE_SIZE};
pub use error::ClientError;
pub use models::RepositorySummary;
