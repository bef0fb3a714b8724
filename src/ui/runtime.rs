use crate::api::ProjectsApi;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_fetch_worker;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the showcase until the user quits.
///
/// View state stays on this thread; HTTP runs on a tokio runtime owned
/// here and shut down on exit.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("showcase-fetch")
        .build()
        .context("Failed to start async runtime")?;
    let api = ProjectsApi::new(&config.api).context("Failed to build projects client")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let commands = spawn_fetch_worker(runtime.handle(), api.clone(), events.sender());

    let mut app = App::new(config.fetch.stale_responses, api.endpoint().as_str());
    app.attach_commands(commands);
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("projects showcase exited");
    Ok(())
}

/// Apply one event from the UI channel to `app`.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize => {}
        AppEvent::FetchCompleted(outcome) => app.on_fetch_completed(outcome),
        AppEvent::InputClosed => {
            tracing::error!("terminal input closed, quitting");
            app.request_quit();
        }
    }
}
