use crate::state::{AppState, Section};
use ratatui::{
    layout::Rect,
    style::Stylize,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub const HEIGHT: u16 = 2;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let tabs = Tabs::new(Section::ALL.map(Section::title))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.panel_border()),
        )
        .select(state.section.index())
        .style(theme.text_secondary())
        .highlight_style(theme.accent().bold());

    f.render_widget(tabs, area);
}
