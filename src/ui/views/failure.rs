use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT_BLUE, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
pub const FAILURE_TEXT: &str = "We cannot seem to find the page you are looking for.";
pub const RETRY_LABEL: &str = "[ Retry ]";

const ILLUSTRATION: [&str; 5] = [
    " .---------. ",
    " |  x   x  | ",
    " |    ^    | ",
    " |  .---.  | ",
    " '---------' ",
];
const ILLUSTRATION_ALT: &str = "failure view";

/// Failure illustration, fixed message and the retry control.
pub fn render_failure(frame: &mut Frame<'_>, area: Rect) {
    let mut lines: Vec<Line> = ILLUSTRATION
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(STATUS_ERROR))))
        .collect();
    lines.push(Line::from(Span::styled(
        ILLUSTRATION_ALT,
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        FAILURE_HEADING,
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        FAILURE_TEXT,
        Style::default().fg(MUTED_TEXT),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        RETRY_LABEL,
        Style::default()
            .fg(ACCENT_BLUE)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    )));

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let target = centered_rect_by_size(area, width, height);
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, target);
}
