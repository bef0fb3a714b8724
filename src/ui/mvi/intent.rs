/// Marker trait for intents: user actions (category picks, retry) and
/// system events (fetch started, fetch completed).
pub trait Intent: Send + 'static {}
