use crate::projects::Category;
use crate::ui::theme::{ACCENT_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

/// Category selector. Drawn in every state.
pub fn render_selector(frame: &mut Frame<'_>, area: Rect, selected: Category) {
    let titles: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(idx, category)| Line::from(format!("{} {}", idx + 1, category.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected.index())
        .style(Style::default().fg(HEADER_TEXT))
        .highlight_style(
            Style::default()
                .fg(ACCENT_BLUE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
        .block(
            Block::default()
                .title(" Category ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_style(Style::default().fg(HEADER_SEPARATOR)),
        );

    frame.render_widget(tabs, area);
}
