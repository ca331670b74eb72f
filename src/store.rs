//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list field
//! only ever receives whole snapshots from `ItemListStore`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::SortBy;
use crate::packing_list::PackingList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest list snapshot
    pub items: PackingList,
    /// Display order chosen in the sort selector
    pub sort_by: SortBy,
}

impl AppState {
    pub fn new(items: PackingList) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
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

/// Current list snapshot (tracked)
pub fn store_items(store: &AppStore) -> PackingList {
    store.items().get()
}

/// Current sort key (tracked)
pub fn store_sort_by(store: &AppStore) -> SortBy {
    store.sort_by().get()
}

/// Replace the list with a new snapshot, skipping identical ones
pub fn store_set_items(store: &AppStore, snapshot: PackingList) {
    if store.items().with_untracked(|current| current.ptr_eq(&snapshot)) {
        return;
    }
    *store.items().write() = snapshot;
}

pub fn store_set_sort_by(store: &AppStore, sort_by: SortBy) {
    *store.sort_by().write() = sort_by;
}
