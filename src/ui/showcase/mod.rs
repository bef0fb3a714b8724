mod intent;
mod reducer;
mod state;

pub use intent::ShowcaseIntent;
pub use reducer::ShowcaseReducer;
pub use state::{RequestId, RequestStatus, ShowcaseState, ShowcaseView};
