//! Page layout
//!
//! ```text
//! ┌ navbar ─────────────────────────┐
//! │ hero banner + tagline           │
//! │ tabs                            │
//! │ projects or a content tab       │
//! └ footer ─────────────────────────┘
//! ```

mod footer;
mod hero;
mod navbar;
mod projects;
mod sections;
mod tabs;

use crate::state::{AppState, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    // Palette background for the whole page
    f.render_widget(Block::default().style(state.theme.panel_background()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(navbar::HEIGHT),
            Constraint::Length(hero::height(state)),
            Constraint::Length(tabs::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(footer::HEIGHT),
        ])
        .split(area);

    navbar::render(state, chunks[0], f);
    hero::render(state, chunks[1], f);
    tabs::render(state, chunks[2], f);
    match state.section {
        Section::Projects => projects::render(state, chunks[3], f),
        _ => sections::render(state, chunks[3], f),
    }
    footer::render(state, chunks[4], f);
}

/// Horizontal breathing room around a section body
fn pad(area: Rect) -> Rect {
    let margin = (area.width / 10).min(8);
    Rect {
        x: area.x + margin,
        width: area.width.saturating_sub(margin * 2),
        ..area
    }
}
