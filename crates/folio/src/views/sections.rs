//! Content tabs: About, Apps, Skills, Certifications, Process and Contact

use crate::state::AppState;
use crate::view_models::{SectionLine, SectionViewModel};
use folio_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some(vm) = SectionViewModel::for_section(state.section, &state.config.content) else {
        return;
    };
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(vm.eyebrow.to_uppercase(), theme.glow())),
        Line::from(Span::styled(vm.title, theme.panel_title())),
        Line::from(Span::styled(vm.subtitle, theme.text_secondary())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(header, chunks[0]);

    let lines: Vec<Line> = vm.lines.iter().map(|line| styled(line, theme)).collect();
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    f.render_widget(body, super::pad(chunks[1]));
}

fn styled<'a>(line: &'a SectionLine, theme: &Theme) -> Line<'a> {
    match line {
        SectionLine::Title(title) => Line::from(Span::styled(title.as_str(), theme.panel_title())),
        SectionLine::Caption(caption) => Line::from(Span::styled(caption.as_str(), theme.muted())),
        SectionLine::Text(text) => Line::from(Span::styled(text.as_str(), theme.text())),
        SectionLine::Entry { label, detail } => Line::from(vec![
            Span::styled("◆ ", theme.glow()),
            Span::styled(label.as_str(), theme.accent().bold()),
            Span::styled("  ", theme.text()),
            Span::styled(detail.as_str(), theme.text_secondary()),
        ]),
        SectionLine::Tags(tags) => Line::from(
            tags.iter()
                .flat_map(|tag| {
                    [
                        Span::styled(format!("[{tag}]"), theme.accent()),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
        SectionLine::Link { label, url } => Line::from(vec![
            Span::styled(format!("{label} "), theme.key_hint()),
            Span::styled(url.as_str(), theme.accent().underlined()),
        ]),
        SectionLine::Blank => Line::from(""),
    }
}
