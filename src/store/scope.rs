use thiserror::Error;

use super::state::AppStore;

/// Misuse of the shared store. Always a programming error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store not initialized for this screen: {screen}")]
    NotInitialized { screen: &'static str },
}

/// The store as seen by one screen.
///
/// A scope is normally created with [`AppStore::scope`]. An unbound scope
/// stands for a screen mounted without a store and refuses every access.
#[derive(Debug, Clone)]
pub struct StoreScope {
    screen: &'static str,
    store: Option<AppStore>,
}

impl StoreScope {
    pub(super) fn bound(screen: &'static str, store: AppStore) -> Self {
        Self {
            screen,
            store: Some(store),
        }
    }

    pub fn unbound(screen: &'static str) -> Self {
        Self {
            screen,
            store: None,
        }
    }

    pub fn screen(&self) -> &'static str {
        self.screen
    }

    pub fn store(&self) -> Result<&AppStore, StoreError> {
        self.store.as_ref().ok_or(StoreError::NotInitialized {
            screen: self.screen,
        })
    }
}
