use crate::config::StalePolicy;
use crate::projects::{Category, ProjectItem};
use crate::ui::mvi::UiState;

/// Monotonic fetch counter. The first request is 1.
pub type RequestId = u64;

/// Lifecycle of the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// Nothing fetched yet (before mount).
    #[default]
    Idle,
    InProgress,
    Success,
    Failure,
}

/// What the body area shows. Derived from `RequestStatus` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseView {
    Empty,
    Loader,
    ProjectList,
    Failure,
}

impl ShowcaseView {
    /// Stable identifier of the rendered state, for automated checks.
    pub fn test_id(self) -> Option<&'static str> {
        match self {
            ShowcaseView::Empty => None,
            ShowcaseView::Loader => Some("loader"),
            ShowcaseView::ProjectList => Some("projects-list"),
            ShowcaseView::Failure => Some("failure-view"),
        }
    }
}

/// View state of the projects showcase.
///
/// `items` is only meaningful while `status` is `Success`. A failed fetch
/// leaves the previous items in place but they are never drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowcaseState {
    pub selected: Category,
    pub items: Vec<ProjectItem>,
    pub status: RequestStatus,
    /// Most recently issued request, `None` before the first fetch.
    pub current_request: Option<RequestId>,
    /// Highlighted row in the project list.
    pub highlighted: usize,
    pub stale_policy: StalePolicy,
}

impl UiState for ShowcaseState {}

impl ShowcaseState {
    pub fn with_policy(stale_policy: StalePolicy) -> Self {
        Self {
            stale_policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> ShowcaseView {
        match self.status {
            RequestStatus::Idle => ShowcaseView::Empty,
            RequestStatus::InProgress => ShowcaseView::Loader,
            RequestStatus::Success => ShowcaseView::ProjectList,
            RequestStatus::Failure => ShowcaseView::Failure,
        }
    }

    /// Items to draw: the list on success, nothing otherwise.
    pub fn visible_items(&self) -> &[ProjectItem] {
        match self.status {
            RequestStatus::Success => self.items.as_slice(),
            _ => &[],
        }
    }

    /// Whether a completion for `request` may write state.
    pub fn accepts(&self, request: RequestId) -> bool {
        match self.stale_policy {
            StalePolicy::Discard => self.current_request == Some(request),
            StalePolicy::LastWriteWins => self.current_request.is_some(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_with_first_category() {
        let state = ShowcaseState::default();
        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.selected, Category::All);
        assert_eq!(state.current_request, None);
        assert_eq!(state.view(), ShowcaseView::Empty);
        assert_eq!(state.view().test_id(), None);
    }

    #[test]
    fn visible_items_only_on_success() {
        let mut state = ShowcaseState {
            items: vec![ProjectItem::new("1", "X", "u")],
            status: RequestStatus::Failure,
            ..ShowcaseState::default()
        };
        assert!(state.visible_items().is_empty());

        state.status = RequestStatus::Success;
        assert_eq!(state.visible_items().len(), 1);
    }

    #[test]
    fn test_ids() {
        assert_eq!(ShowcaseView::Loader.test_id(), Some("loader"));
        assert_eq!(ShowcaseView::ProjectList.test_id(), Some("projects-list"));
        assert_eq!(ShowcaseView::Failure.test_id(), Some("failure-view"));
    }

    #[test]
    fn accepts_depends_on_policy() {
        let mut state = ShowcaseState {
            current_request: Some(3),
            ..ShowcaseState::default()
        };
        assert!(state.accepts(3));
        assert!(!state.accepts(2));

        state.stale_policy = StalePolicy::LastWriteWins;
        assert!(state.accepts(2));
    }

    #[test]
    fn nothing_accepted_before_first_fetch() {
        let state = ShowcaseState::with_policy(StalePolicy::LastWriteWins);
        assert!(!state.accepts(1));
    }
}
