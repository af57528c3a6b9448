//! Base trait for UI state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States are replaced wholesale by reducers, hold everything their view
/// needs, and compare by value so a no-op intent is observable in tests.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
