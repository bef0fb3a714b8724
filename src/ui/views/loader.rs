use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT_BLUE, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
pub const LOADING_TEXT: &str = "Loading projects...";

pub fn render_loader(frame: &mut Frame<'_>, area: Rect, tick: usize) {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(ACCENT_BLUE)),
        Span::raw(" "),
        Span::styled(LOADING_TEXT, Style::default().fg(MUTED_TEXT)),
    ]);

    let width = line.width() as u16;
    let target = centered_rect_by_size(area, width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), target);
}
