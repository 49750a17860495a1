use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};

pub const HEIGHT: u16 = 1;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let footer = Paragraph::new(state.config.current_copyright())
        .style(state.theme.muted())
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
