/// Marker trait for view state.
///
/// `Default` is required so `App` can move the state out with
/// `std::mem::take` while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
