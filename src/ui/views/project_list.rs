use crate::projects::ProjectItem;
use crate::ui::theme::{ACCENT_BLUE, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

/// Ordered project list: name, then image URL, one entry per item.
pub fn render_project_list(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[ProjectItem],
    highlighted: usize,
) {
    let entries: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    item.name.clone(),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("  img ", Style::default().fg(ACCENT_BLUE)),
                    Span::styled(item.image_url.clone(), Style::default().fg(MUTED_TEXT)),
                ]),
            ])
        })
        .collect();

    let list = List::new(entries)
        .block(
            Block::default()
                .title(format!(" Projects ({}) ", items.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let selected = (!items.is_empty()).then_some(highlighted.min(items.len().saturating_sub(1)));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
