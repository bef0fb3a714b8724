//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use reqwest::StatusCode;
use showcase::api::{FetchError, ProjectsApi};
use showcase::config::{ApiConfig, StalePolicy};
use showcase::projects::{Category, ProjectItem};
use showcase::ui::app::{App, FetchOutcome, UiCommand};
use showcase::ui::events::AppEvent;
use showcase::ui::render::draw;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    make_app_with_policy(StalePolicy::Discard)
}

pub fn make_app_with_policy(policy: StalePolicy) -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(32);
    let mut app = App::new(policy, "http://127.0.0.1/ps/projects");
    app.attach_commands(tx);
    (app, rx)
}

/// Drain every queued fetch command as `(request, category)`.
pub fn drain_commands(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<(u64, Category)> {
    let mut out = Vec::new();
    while let Ok(UiCommand::Fetch { request, category }) = rx.try_recv() {
        out.push((request, category));
    }
    out
}

pub fn ok_outcome(request: u64, category: Category, items: Vec<ProjectItem>) -> FetchOutcome {
    FetchOutcome {
        request,
        category,
        result: Ok(items),
    }
}

pub fn status_outcome(request: u64, category: Category, status: u16) -> FetchOutcome {
    FetchOutcome {
        request,
        category,
        result: Err(FetchError::Status {
            status: StatusCode::from_u16(status).unwrap(),
        }),
    }
}

pub fn sample_items(n: usize) -> Vec<ProjectItem> {
    (1..=n)
        .map(|i| {
            ProjectItem::new(
                i.to_string(),
                format!("Project {}", i),
                format!("https://img.test/{}.png", i),
            )
        })
        .collect()
}

// -- HTTP helpers -------------------------------------------------------------

pub fn api_for(base_url: &str) -> ProjectsApi {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
    };
    ProjectsApi::new(&config).expect("Failed to build projects client")
}

/// Wait for the next fetch completion on the UI event channel.
pub async fn next_outcome(rx: &Receiver<AppEvent>, timeout: Duration) -> FetchOutcome {
    let start = Instant::now();
    loop {
        match rx.try_recv() {
            Ok(AppEvent::FetchCompleted(outcome)) => return outcome,
            Ok(_) => continue,
            Err(TryRecvError::Empty) if start.elapsed() < timeout => {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(err) => panic!("no fetch completion within {:?}: {:?}", timeout, err),
        }
    }
}

// -- Rendering ----------------------------------------------------------------

/// Draw one frame and return the screen as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
