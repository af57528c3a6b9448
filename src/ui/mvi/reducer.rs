//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// An intent that does not apply (blank submit, toggle with nothing to
/// toggle) returns the state it was given.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
