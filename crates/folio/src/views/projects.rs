use crate::state::AppState;
use crate::view_models::{ProjectCardViewModel, ProjectsBody, ProjectsViewModel};
use folio_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::ops::Range;

/// Rows per card, borders included
const CARD_HEIGHT: u16 = 6;

/// Placeholder bar widths, as percent of the card width
const SKELETON_BARS: [u16; 4] = [75, 100, 83, 33];

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = ProjectsViewModel::from_state(&state.projects, state.animation_frame);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(vm.heading, theme.panel_title())),
        Line::from(Span::styled(vm.subtitle, theme.text_secondary())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let body = super::pad(chunks[1]);
    match &vm.body {
        ProjectsBody::Skeletons { count, frame } => {
            render_skeletons(*count, *frame, theme, body, f);
        }
        ProjectsBody::Failure { headline, detail } => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(*headline, theme.error())),
                Line::from(""),
                Line::from(Span::styled(detail.clone(), theme.muted())),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                body,
            );
        }
        ProjectsBody::Empty { message } => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(*message, theme.muted())),
            ];
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
        }
        ProjectsBody::Cards { cards, selected } => {
            let range = visible_range(cards.len(), *selected, capacity(body));
            for (slot, card) in cards[range].iter().enumerate() {
                render_card(card, theme, card_area(body, slot), f);
            }
        }
    }
}

fn capacity(area: Rect) -> usize {
    usize::from((area.height / CARD_HEIGHT).max(1))
}

fn card_area(body: Rect, slot: usize) -> Rect {
    let offset = u16::try_from(slot).unwrap_or(u16::MAX).saturating_mul(CARD_HEIGHT);
    let y = body.y.saturating_add(offset);
    let height = CARD_HEIGHT.min(body.bottom().saturating_sub(y));
    Rect { y, height, ..body }
}

/// Window of cards to show so that `selected` stays visible
fn visible_range(total: usize, selected: usize, capacity: usize) -> Range<usize> {
    if total <= capacity {
        return 0..total;
    }
    let start = selected.saturating_sub(capacity - 1).min(total - capacity);
    start..start + capacity
}

fn render_card(card: &ProjectCardViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let (border, background) = if card.is_selected {
        (theme.panel_border_focused(), theme.selection())
    } else {
        (theme.panel_border(), theme.panel_background())
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", card.name), theme.panel_title()))
        .borders(Borders::ALL)
        .border_style(border)
        .style(background);

    let lines = vec![
        Line::from(Span::styled(card.description.clone(), theme.text_secondary())),
        Line::from(Span::styled(card.updated.clone(), theme.muted())),
        Line::from(vec![
            Span::styled("View Project ", theme.accent().bold()),
            Span::styled(card.url.clone(), theme.accent().underlined()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_skeletons(count: usize, frame: usize, theme: &Theme, body: Rect, f: &mut Frame) {
    let shown = count.min(capacity(body));
    for slot in 0..shown {
        let area = card_area(body, slot);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border());
        let inner = block.inner(area);

        // Neighbouring cards pulse out of phase
        let style = theme.skeleton(frame + slot);
        let lines: Vec<Line> = SKELETON_BARS
            .iter()
            .map(|percent| {
                let width = usize::from(inner.width) * usize::from(*percent) / 100;
                Line::from(Span::styled("▆".repeat(width), style))
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{LoadState, ProjectList};
    use crate::views::test_support::{buffer_text, render_to_buffer};
    use gh_client::RepositorySummary;

    fn state_with(load_state: LoadState) -> AppState {
        let mut state = AppState::default();
        state.projects.load_state = load_state;
        state
    }

    fn repo(id: u64) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("orbit-{id}"),
            description: Some(format!("Experiment number {id}")),
            html_url: format!("https://github.com/davianspace/orbit-{id}"),
            updated_at: "2024-03-01T12:00:00Z".parse().unwrap(),
            is_fork: false,
        }
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(3, 0, 5), 0..3);
        assert_eq!(visible_range(10, 0, 4), 0..4);
        assert_eq!(visible_range(10, 3, 4), 0..4);
        assert_eq!(visible_range(10, 4, 4), 1..5);
        assert_eq!(visible_range(10, 9, 4), 6..10);
    }

    #[test]
    fn test_loading_renders_placeholders_only() {
        let text = buffer_text(&render_to_buffer(&state_with(LoadState::Loading), 100, 60));
        assert!(text.contains('▆'));
        assert!(!text.contains("View Project"));
        assert!(!text.contains("No projects found."));
    }

    #[test]
    fn test_error_renders_no_cards() {
        let state = state_with(LoadState::Error {
            detail: "HTTP 404: Not Found".to_string(),
        });
        let text = buffer_text(&render_to_buffer(&state, 100, 60));
        assert!(text.contains("Unable to load projects at this time."));
        assert!(text.contains("HTTP 404: Not Found"));
        assert!(!text.contains("View Project"));
        assert!(!text.contains('▆'));
    }

    #[test]
    fn test_empty_renders_message_only() {
        let state = state_with(LoadState::Ready(ProjectList::default()));
        let text = buffer_text(&render_to_buffer(&state, 100, 60));
        assert!(text.contains("No projects found."));
        assert!(!text.contains("View Project"));
        assert!(!text.contains('▆'));
    }

    #[test]
    fn test_ready_renders_one_card_per_project() {
        let list = ProjectList::from_listing(vec![repo(1), repo(2)]);
        let text = buffer_text(&render_to_buffer(&state_with(LoadState::Ready(list)), 100, 60));
        assert_eq!(text.matches("View Project").count(), 2);
        assert!(text.contains("orbit-1"));
        assert!(text.contains("https://github.com/davianspace/orbit-2"));
        assert!(text.contains("Updated Mar 1, 2024"));
        assert!(!text.contains("No projects found."));
    }

    #[test]
    fn test_selected_card_stays_visible() {
        let list = ProjectList::from_listing((1..=20).map(repo).collect());
        let mut state = state_with(LoadState::Ready(list));
        state.projects.selected = 19;

        let text = buffer_text(&render_to_buffer(&state, 100, 40));
        // All twenty share a timestamp, so the API order is kept
        assert!(text.contains("orbit-20"));
        assert!(!text.contains("orbit-1 "));
    }
}
