/// Marker for a self-contained snapshot of what a view renders.
///
/// `Default` is required so `App` can move the state out with
/// `std::mem::take` while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
