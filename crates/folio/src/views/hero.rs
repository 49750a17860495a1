use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Banner rows, the tagline and a blank line on either side
pub fn height(state: &AppState) -> u16 {
    let rows = state.hero_banner.len().max(1) + 3;
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let mut lines = vec![Line::from("")];
    if state.hero_banner.is_empty() {
        lines.push(Line::from(Span::styled(
            state.config.site_name.clone(),
            theme.glow(),
        )));
    } else {
        lines.extend(
            state
                .hero_banner
                .iter()
                .map(|row| Line::from(Span::styled(row.clone(), theme.glow()))),
        );
    }
    lines.push(Line::from(Span::styled(
        state.config.tagline.clone(),
        theme.text_secondary(),
    )));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
