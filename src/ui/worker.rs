//! Fetch worker: runs HTTP requests on the tokio runtime and reports
//! completions to the UI thread.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::ProjectsApi;
use crate::ui::app::{FetchOutcome, UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_CHANNEL_SIZE: usize = 32;

/// Spawn the worker loop on `handle` and return the command sender.
///
/// Each fetch runs in its own task, so a newer request never waits for
/// (or cancels) an older one.
pub fn spawn_fetch_worker(
    handle: &Handle,
    api: ProjectsApi,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_CHANNEL_SIZE);
    let spawner = handle.clone();

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Fetch { request, category } => {
                    let api = api.clone();
                    let events = events.clone();
                    spawner.spawn(async move {
                        tracing::debug!(request, url = %api.request_url(category), "GET");
                        let result = api.fetch(category).await;
                        let outcome = FetchOutcome {
                            request,
                            category,
                            result,
                        };
                        if events.send(AppEvent::FetchCompleted(outcome)).is_err() {
                            tracing::debug!(request, "UI gone, dropping fetch result");
                        }
                    });
                }
            }
        }
        tracing::debug!("fetch worker stopped");
    });

    tx
}
