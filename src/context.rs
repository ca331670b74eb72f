//! Application Context
//!
//! Shared handle to the list store, provided via Leptos Context API.
//! Components call these methods; the store publishes each new snapshot
//! into `AppStore`, which drives re-rendering.

use leptos::prelude::*;

use crate::draft::NewItem;
use crate::models::{ItemId, SortBy};
use crate::packing_list::ItemListStore;
use crate::store::{store_set_items, store_set_sort_by, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    list: StoredValue<ItemListStore>,
    /// Reactive mirror of the list and the sort key
    pub store: AppStore,
    /// Largest quantity offered by the add form
    pub max_quantity: u32,
}

impl AppContext {
    pub fn new(mut list: ItemListStore, store: AppStore, max_quantity: u32) -> Self {
        list.subscribe(move |snapshot| store_set_items(&store, snapshot.clone()));
        store_set_items(&store, list.items());
        Self {
            list: StoredValue::new(list),
            store,
            max_quantity,
        }
    }

    pub fn add_item(&self, item: NewItem) {
        self.list.update_value(|list| {
            list.add(item.description, item.quantity);
        });
    }

    pub fn toggle_packed(&self, id: ItemId) {
        self.list.update_value(|list| {
            list.toggle_packed(id);
        });
    }

    pub fn delete_item(&self, id: ItemId) {
        self.list.update_value(|list| {
            list.delete_item(id);
        });
    }

    /// Asks for confirmation before emptying the list
    pub fn clear_list(&self) {
        self.list.update_value(|list| {
            list.clear_list();
        });
    }

    pub fn set_sort_by(&self, sort_by: SortBy) {
        store_set_sort_by(&self.store, sort_by);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
