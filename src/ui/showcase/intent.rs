use crate::projects::{Category, ProjectItem};
use crate::ui::mvi::Intent;
use crate::ui::showcase::state::RequestId;

#[derive(Debug, Clone)]
pub enum ShowcaseIntent {
    /// Record the selected category. Does not fetch by itself.
    SelectCategory { category: Category },
    /// A fetch was issued; it becomes the current request.
    FetchStarted { request: RequestId },
    FetchSucceeded {
        request: RequestId,
        items: Vec<ProjectItem>,
    },
    /// Non-2xx status, transport error, or undecodable body.
    FetchFailed { request: RequestId },
    HighlightUp,
    HighlightDown,
}

impl Intent for ShowcaseIntent {}
