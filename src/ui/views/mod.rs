//! Body views, one per `ShowcaseView`, plus the category selector.

mod failure;
mod loader;
mod project_list;
mod selector;

pub use failure::{render_failure, FAILURE_HEADING, FAILURE_TEXT, RETRY_LABEL};
pub use loader::{render_loader, LOADING_TEXT, SPINNER_FRAMES};
pub use project_list::render_project_list;
pub use selector::render_selector;
