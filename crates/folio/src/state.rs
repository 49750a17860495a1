use crate::domain_models::LoadState;
use folio_config::AppConfig;
use folio_theme::{Theme, ThemePreference};

/// Projects section state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsState {
    pub load_state: LoadState,
    /// Cursor over the rendered cards
    pub selected: usize,
}

/// Page tabs, in navigation order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Projects,
    About,
    Apps,
    Skills,
    Certifications,
    Process,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Projects,
        Section::About,
        Section::Apps,
        Section::Skills,
        Section::Certifications,
        Section::Process,
        Section::Contact,
    ];

    /// Tab label
    pub fn title(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Apps => "Apps",
            Section::Skills => "Skills",
            Section::Certifications => "Certifications",
            Section::Process => "Process",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }

    /// Following tab, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding tab, wrapping around
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub config: AppConfig,
    /// Hero banner, pre-rendered from the site name
    pub hero_banner: Vec<String>,
    pub theme_preference: ThemePreference,
    /// Palette derived from `theme_preference`
    pub theme: Theme,
    pub projects: ProjectsState,
    /// Active tab
    pub section: Section,
    /// First visible row of a content tab; reset when the tab changes
    pub scroll: u16,
    pub animation_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            config: AppConfig::default(),
            hero_banner: Vec::new(),
            theme_preference: ThemePreference::default(),
            theme: Theme::default(),
            projects: ProjectsState::default(),
            section: Section::default(),
            scroll: 0,
            animation_frame: 0,
        }
    }
}
