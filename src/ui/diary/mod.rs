//! Diary screen: write notes and browse them.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DiaryIntent;
pub use reducer::DiaryReducer;
pub use state::DiaryState;
pub use view::{render_diary, EMPTY_MESSAGE, INPUT_LABEL};

use crate::store::{AppStore, StoreError, StoreScope};
use crate::ui::mvi::dispatch_mvi;

pub const SCREEN_NAME: &str = "diary";

/// Diary screen controller.
///
/// Owns the entry list and publishes the entry count to the shared store
/// whenever a new entry is written.
#[derive(Debug)]
pub struct DiaryScreen {
    state: DiaryState,
    store: AppStore,
}

impl DiaryScreen {
    /// Mount the screen inside `scope`. Fails if the scope has no store.
    pub fn mount(scope: &StoreScope, show_all: bool) -> Result<Self, StoreError> {
        let store = scope.store()?.clone();
        Ok(Self {
            state: DiaryState::new(show_all),
            store,
        })
    }

    pub fn state(&self) -> &DiaryState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: DiaryIntent) {
        let submitted = intent == DiaryIntent::Submit;
        let before = self.state.entries().len();
        dispatch_mvi!(self, state, DiaryReducer, intent);
        let after = self.state.entries().len();

        if after != before {
            if let Some(entry) = self.state.entries().last() {
                tracing::info!(id = entry.id, total = after, "diary entry written");
            }
            self.store.set_total_notes(after);
        } else if submitted {
            tracing::debug!("blank diary entry ignored");
        }
    }
}
