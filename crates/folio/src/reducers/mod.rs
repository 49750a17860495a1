pub mod app_reducer;
pub mod navigation_reducer;
pub mod projects_reducer;
pub mod theme_reducer;
