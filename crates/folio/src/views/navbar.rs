use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEIGHT: u16 = 3;

/// Site name on the left, theme toggle and key hints on the right
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.panel_border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {}", state.config.site_name),
        theme.panel_title(),
    )));
    f.render_widget(brand, chunks[0]);

    let toggle = if state.theme_preference.is_dark() {
        "🌙 dark"
    } else {
        "☀ light"
    };
    let hints = Line::from(vec![
        Span::styled(toggle, theme.glow()),
        Span::raw("  "),
        Span::styled("t", theme.key_hint()),
        Span::styled(
            format!(" {}  ", state.theme_preference.toggle()),
            theme.key_description(),
        ),
        Span::styled("⇥", theme.key_hint()),
        Span::styled(" tab  ", theme.key_description()),
        Span::styled("j/k", theme.key_hint()),
        Span::styled(" move  ", theme.key_description()),
        Span::styled("⏎", theme.key_hint()),
        Span::styled(" open  ", theme.key_description()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" quit ", theme.key_description()),
    ]);
    f.render_widget(
        Paragraph::new(hints).alignment(Alignment::Right),
        chunks[1],
    );
}
