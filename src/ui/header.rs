use crate::ui::theme::{ACCENT_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Site logo row with the endpoint being browsed.
pub struct Header<'a> {
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(ACCENT_BLUE)),
            Span::styled(
                "Projects Showcase",
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(self.endpoint, Style::default().fg(HEADER_SEPARATOR)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
