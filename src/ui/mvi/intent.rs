//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are key presses, pasted text and screen actions such as
/// submitting a draft. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
