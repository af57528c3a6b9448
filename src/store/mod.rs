//! Shared application state.
//!
//! Holds what both screens need to agree on: the user's display name and the
//! number of notes written. The store is an explicit handle handed to each
//! screen when it mounts; every write is pushed to subscribers before the
//! setter returns.

mod scope;
mod state;

pub use scope::{StoreError, StoreScope};
pub use state::{AppSnapshot, AppStore, SubscriptionId};
