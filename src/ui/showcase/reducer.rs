use crate::ui::mvi::Reducer;
use crate::ui::showcase::intent::ShowcaseIntent;
use crate::ui::showcase::state::{RequestStatus, ShowcaseState};

pub struct ShowcaseReducer;

impl Reducer for ShowcaseReducer {
    type State = ShowcaseState;
    type Intent = ShowcaseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShowcaseIntent::SelectCategory { category } => ShowcaseState {
                selected: category,
                ..state
            },
            ShowcaseIntent::FetchStarted { request } => ShowcaseState {
                status: RequestStatus::InProgress,
                current_request: Some(request),
                ..state
            },
            ShowcaseIntent::FetchSucceeded { request, items } => {
                if !state.accepts(request) {
                    return state;
                }
                ShowcaseState {
                    items,
                    status: RequestStatus::Success,
                    highlighted: 0,
                    ..state
                }
            }
            ShowcaseIntent::FetchFailed { request } => {
                if !state.accepts(request) {
                    return state;
                }
                // Previous items stay; they are hidden outside Success.
                ShowcaseState {
                    status: RequestStatus::Failure,
                    ..state
                }
            }
            ShowcaseIntent::HighlightUp => move_highlight(state, Step::Up),
            ShowcaseIntent::HighlightDown => move_highlight(state, Step::Down),
        }
    }
}

enum Step {
    Up,
    Down,
}

/// Wrapping highlight move; only meaningful for a non-empty loaded list.
fn move_highlight(state: ShowcaseState, step: Step) -> ShowcaseState {
    let len = state.items.len();
    if state.status != RequestStatus::Success || len == 0 {
        return state;
    }
    let highlighted = match step {
        Step::Up => (state.highlighted + len - 1) % len,
        Step::Down => (state.highlighted + 1) % len,
    };
    ShowcaseState {
        highlighted,
        ..state
    }
}
