use crate::projects::Category;
use crate::ui::app::App;
use crate::ui::showcase::ShowcaseView;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    // Selector keys work in every state
    match key.code {
        KeyCode::Right | KeyCode::Tab => {
            app.next_category();
            return;
        }
        KeyCode::Left | KeyCode::BackTab => {
            app.prev_category();
            return;
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let position = ch.to_digit(10).unwrap_or(0) as usize;
            if let Some(category) = position.checked_sub(1).and_then(Category::from_index) {
                app.pick_category(category);
            }
            return;
        }
        _ => {}
    }

    match app.view() {
        ShowcaseView::Failure => {
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Enter) {
                app.retry();
            }
        }
        ShowcaseView::ProjectList => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.highlight_up(),
            KeyCode::Down | KeyCode::Char('j') => app.highlight_down(),
            _ => {}
        },
        ShowcaseView::Loader | ShowcaseView::Empty => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
