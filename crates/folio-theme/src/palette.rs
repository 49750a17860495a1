use crate::preference::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

/// Color palette used by all views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg_panel: Color,
    pub bg_selected: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub glow: Color,
    pub status_error: Color,
    pub skeleton: Color,
    pub skeleton_pulse: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg_panel: Color::Rgb(11, 15, 25),
            bg_selected: Color::Rgb(31, 41, 55),
            border: Color::Rgb(55, 65, 81),
            border_focused: Color::Rgb(96, 165, 250),
            text_primary: Color::Rgb(243, 244, 246),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(156, 163, 175),
            accent: Color::Rgb(96, 165, 250),
            glow: Color::Rgb(250, 204, 21),
            status_error: Color::Rgb(248, 113, 113),
            skeleton: Color::Rgb(55, 65, 81),
            skeleton_pulse: Color::Rgb(75, 85, 99),
        }
    }

    pub fn light() -> Self {
        Self {
            bg_panel: Color::Rgb(249, 250, 251),
            bg_selected: Color::Rgb(229, 231, 235),
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(37, 99, 235),
            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(75, 85, 99),
            text_muted: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(37, 99, 235),
            glow: Color::Rgb(245, 158, 11),
            status_error: Color::Rgb(220, 38, 38),
            skeleton: Color::Rgb(229, 231, 235),
            skeleton_pulse: Color::Rgb(209, 213, 219),
        }
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel).fg(self.text_primary)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn panel_border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn glow(&self) -> Style {
        Style::default().fg(self.glow).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn selection(&self) -> Style {
        Style::default().bg(self.bg_selected)
    }

    /// Placeholder bar color, alternating with the animation frame
    pub fn skeleton(&self, frame: usize) -> Style {
        let color = if frame % 2 == 0 {
            self.skeleton
        } else {
            self.skeleton_pulse
        };
        Style::default().fg(color)
    }
}
