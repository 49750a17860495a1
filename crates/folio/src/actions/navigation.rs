//! Actions for moving between tabs and through a content tab.

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    NextSection,
    PreviousSection,
    ScrollDown,
    ScrollUp,
}
