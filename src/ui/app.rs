use crate::api::FetchError;
use crate::config::StalePolicy;
use crate::projects::{Category, ProjectItem};
use crate::ui::mvi::Reducer;
use crate::ui::showcase::{
    RequestId, RequestStatus, ShowcaseIntent, ShowcaseReducer, ShowcaseState, ShowcaseView,
};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Fetch {
        request: RequestId,
        category: Category,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Result of one fetch, delivered back to the UI thread.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: RequestId,
    pub category: Category,
    pub result: Result<Vec<ProjectItem>, FetchError>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    mounted: bool,
    /// View state (MVI pattern).
    showcase: ShowcaseState,
    last_request: RequestId,
    spinner_tick: usize,
    /// Endpoint shown in the header.
    endpoint: String,
    command_sender: Option<UiCommandSender>,
    last_error: Option<String>,
}

impl App {
    pub fn new(stale_policy: StalePolicy, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            mounted: false,
            showcase: ShowcaseState::with_policy(stale_policy),
            last_request: 0,
            spinner_tick: 0,
            endpoint: endpoint.into(),
            command_sender: None,
            last_error: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn showcase(&self) -> &ShowcaseState {
        &self.showcase
    }

    pub fn status(&self) -> RequestStatus {
        self.showcase.status
    }

    pub fn view(&self) -> ShowcaseView {
        self.showcase.view()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// First fetch, for the default category. Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.fetch_selected();
    }

    /// Select `category` and fetch it. The selection is stored before
    /// the fetch command is sent.
    pub fn change_category(&mut self, category: Category) {
        dispatch_mvi!(
            self,
            showcase,
            ShowcaseReducer,
            ShowcaseIntent::SelectCategory { category }
        );
        self.fetch_selected();
    }

    /// Direct pick from the selector; picking the current category is a no-op.
    pub fn pick_category(&mut self, category: Category) {
        if category != self.showcase.selected {
            self.change_category(category);
        }
    }

    pub fn next_category(&mut self) {
        self.change_category(self.showcase.selected.next());
    }

    pub fn prev_category(&mut self) {
        self.change_category(self.showcase.selected.prev());
    }

    /// Re-run the fetch for the currently selected category.
    pub fn retry(&mut self) {
        tracing::info!(category = self.showcase.selected.id(), "retry requested");
        self.fetch_selected();
    }

    pub fn highlight_up(&mut self) {
        dispatch_mvi!(self, showcase, ShowcaseReducer, ShowcaseIntent::HighlightUp);
    }

    pub fn highlight_down(&mut self) {
        dispatch_mvi!(self, showcase, ShowcaseReducer, ShowcaseIntent::HighlightDown);
    }

    pub fn on_tick(&mut self) {
        if self.showcase.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn on_fetch_completed(&mut self, outcome: FetchOutcome) {
        let FetchOutcome {
            request,
            category,
            result,
        } = outcome;

        if !self.showcase.accepts(request) {
            tracing::debug!(
                request,
                current = ?self.showcase.current_request,
                category = category.id(),
                "discarding stale fetch result"
            );
            return;
        }

        match result {
            Ok(items) => {
                tracing::info!(
                    request,
                    category = category.id(),
                    count = items.len(),
                    "projects loaded"
                );
                self.last_error = None;
                dispatch_mvi!(
                    self,
                    showcase,
                    ShowcaseReducer,
                    ShowcaseIntent::FetchSucceeded { request, items }
                );
            }
            Err(err) => {
                tracing::warn!(
                    request,
                    category = category.id(),
                    kind = err.kind(),
                    error = %err,
                    "projects fetch failed"
                );
                self.last_error = Some(err.to_string());
                dispatch_mvi!(
                    self,
                    showcase,
                    ShowcaseReducer,
                    ShowcaseIntent::FetchFailed { request }
                );
            }
        }
    }

    fn fetch_selected(&mut self) {
        self.last_request += 1;
        let request = self.last_request;
        let category = self.showcase.selected;

        dispatch_mvi!(
            self,
            showcase,
            ShowcaseReducer,
            ShowcaseIntent::FetchStarted { request }
        );
        tracing::info!(request, category = category.id(), "fetching projects");

        if let Err(message) = self.send_command(UiCommand::Fetch { request, category }) {
            tracing::error!(request, error = %message, "fetch command not delivered");
            self.last_error = Some(message);
            dispatch_mvi!(
                self,
                showcase,
                ShowcaseReducer,
                ShowcaseIntent::FetchFailed { request }
            );
        }
    }

    fn send_command(&self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("fetch worker not attached".to_string());
        };

        sender
            .try_send(command)
            .map_err(|err| format!("fetch worker unavailable: {}", err))
    }
}
