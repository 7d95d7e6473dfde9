//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! locally-persisted state. Screens re-read the backend after every
//! mutation (via AppContext::reload) and the refreshed collections land
//! here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::WatchEntry;

/// Locally-persisted state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tracked titles, newest first
    pub watchlist: Vec<WatchEntry>,
    /// Liked title ids
    pub likes: Vec<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current watchlist, tracked when read inside a reactive closure
pub fn store_watchlist(store: &AppStore) -> Vec<WatchEntry> {
    store.watchlist().get()
}

/// Replace the watchlist with a fresh read from the backend
pub fn store_set_watchlist(store: &AppStore, entries: Vec<WatchEntry>) {
    *store.watchlist().write() = entries;
}

/// Replace the like set with a fresh read from the backend
pub fn store_set_likes(store: &AppStore, likes: Vec<u32>) {
    *store.likes().write() = likes;
}

/// Whether a title is on the watchlist
pub fn store_is_tracked(store: &AppStore, mal_id: u32) -> bool {
    store.watchlist().read().iter().any(|e| e.id == mal_id)
}

/// Find a watchlist entry by title id
pub fn store_find_entry(store: &AppStore, mal_id: u32) -> Option<WatchEntry> {
    store.watchlist().read().iter().find(|e| e.id == mal_id).cloned()
}

/// Whether a title is liked
pub fn store_is_liked(store: &AppStore, mal_id: u32) -> bool {
    store.likes().read().contains(&mal_id)
}
