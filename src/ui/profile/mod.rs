//! Profile screen: set the display name and see how many notes exist.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProfileIntent;
pub use reducer::{validate_name, ProfileReducer};
pub use state::ProfileState;
pub use view::{render_profile, NAME_PROMPT};

use crate::store::{AppStore, StoreError, StoreScope};
use crate::ui::mvi::dispatch_mvi;

pub const SCREEN_NAME: &str = "profile";

/// Profile screen controller.
#[derive(Debug)]
pub struct ProfileScreen {
    state: ProfileState,
    store: AppStore,
}

impl ProfileScreen {
    /// Mount the screen inside `scope`. Fails if the scope has no store.
    pub fn mount(scope: &StoreScope) -> Result<Self, StoreError> {
        let store = scope.store()?.clone();
        Ok(Self {
            state: ProfileState::default(),
            store,
        })
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: ProfileIntent) {
        dispatch_mvi!(self, state, ProfileReducer, intent);
    }

    /// Save the draft as the display name.
    ///
    /// Blank drafts never reach the store. Returns whether a name was saved.
    pub fn save(&mut self) -> bool {
        let Some(name) = validate_name(self.state.draft()) else {
            tracing::debug!("blank display name ignored");
            return false;
        };
        self.store.set_user_name(name);
        self.dispatch(ProfileIntent::Saved);
        tracing::info!("display name saved");
        true
    }

    pub fn user_name(&self) -> Option<String> {
        self.store.user_name()
    }

    pub fn total_notes(&self) -> usize {
        self.store.total_notes()
    }
}
