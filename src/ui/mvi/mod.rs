//! Model-View-Intent (MVI) architecture primitives.
//!
//! Each screen keeps its local UI state in a [`UiState`], changes it only
//! through a pure [`Reducer`] fed with [`Intent`]s, and renders from the
//! resulting state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (writes to the shared store) happen in the screen
//! controller after the reducer returns, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        )
    };
}

pub(crate) use dispatch_mvi;
