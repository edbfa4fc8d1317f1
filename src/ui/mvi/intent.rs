/// Marker for something the user (or the clock) asked the UI to do.
pub trait Intent: Send + 'static {}
