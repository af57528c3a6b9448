use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::scope::StoreScope;

/// Point-in-time copy of the shared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppSnapshot {
    /// Display name set from the profile screen. `None` until the first save.
    pub user_name: Option<String>,
    /// Number of diary entries written this run.
    pub total_notes: usize,
}

/// Handle returned by [`AppStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&AppSnapshot) + Send + Sync>;

/// Shared state container with replace-and-notify semantics.
///
/// Cloning the handle is cheap and every clone sees the same state. Setters
/// do no validation; callers are expected to hand in values that already
/// satisfy their screen's rules.
#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    state: RwLock<AppSnapshot>,
    listeners: Mutex<Listeners>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope that lets `screen` reach this store.
    pub fn scope(&self, screen: &'static str) -> StoreScope {
        StoreScope::bound(screen, self.clone())
    }

    pub fn user_name(&self) -> Option<String> {
        self.inner.state.read().user_name.clone()
    }

    pub fn set_user_name(&self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(chars = name.chars().count(), "user name replaced");
        self.update(move |state| state.user_name = Some(name));
    }

    pub fn total_notes(&self) -> usize {
        self.inner.state.read().total_notes
    }

    pub fn set_total_notes(&self, count: usize) {
        tracing::debug!(count, "note count replaced");
        self.update(|state| state.total_notes = count);
    }

    pub fn snapshot(&self) -> AppSnapshot {
        self.inner.state.read().clone()
    }

    /// Register a listener called with the new snapshot after every write.
    ///
    /// Listeners run on the writer's thread, after the state lock has been
    /// released, so they may read the store.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AppSnapshot) + Send + Sync + 'static,
    {
        let mut listeners = self.inner.listeners.lock();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.entries.len();
        listeners.entries.retain(|(existing, _)| *existing != id);
        listeners.entries.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().entries.len()
    }

    fn update<F: FnOnce(&mut AppSnapshot)>(&self, apply: F) {
        let snapshot = {
            let mut state = self.inner.state.write();
            apply(&mut state);
            state.clone()
        };
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStore")
            .field("state", &*self.inner.state.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_empty() {
        let store = AppStore::new();
        assert_eq!(store.user_name(), None);
        assert_eq!(store.total_notes(), 0);
    }

    #[test]
    fn clones_share_state() {
        let store = AppStore::new();
        let other = store.clone();
        other.set_total_notes(4);
        assert_eq!(store.total_notes(), 4);
    }

    #[test]
    fn listener_may_read_store_during_notification() {
        let store = AppStore::new();
        let seen = Arc::new(Mutex::new(None));
        let reader = store.clone();
        let sink = Arc::clone(&seen);
        store.subscribe(move |_| {
            *sink.lock() = reader.user_name();
        });
        store.set_user_name("Bob");
        assert_eq!(seen.lock().as_deref(), Some("Bob"));
    }
}
