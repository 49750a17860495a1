mod load_state;

pub use load_state::{LoadState, ProjectList};
