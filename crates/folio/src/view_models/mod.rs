pub mod projects_view_model;
pub mod section_view_model;

pub use projects_view_model::{ProjectCardViewModel, ProjectsBody, ProjectsViewModel};
pub use section_view_model::{SectionLine, SectionViewModel};
