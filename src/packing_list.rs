//! Item List Store
//!
//! Immutable list snapshots plus the store that owns the current one.
//! Every mutation produces a new `PackingList`; unchanged items are shared
//! by `Arc` with the previous snapshot, and a no-op hands back the very same
//! snapshot so observers can compare by pointer.

use std::sync::Arc;

use crate::confirm::Confirm;
use crate::models::{Item, ItemId, SortBy};
use crate::sort::sorted_view;
use crate::stats::Stats;

pub const DEFAULT_CLEAR_MESSAGE: &str = "Are you sure you want to delete all the items?";

/// Immutable, ordered snapshot of the list
#[derive(Debug, Clone, Default)]
pub struct PackingList {
    items: Arc<Vec<Arc<Item>>>,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: Arc::new(items.into_iter().map(Arc::new).collect()),
        }
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Largest id currently in the list
    pub fn max_id(&self) -> Option<ItemId> {
        self.iter().map(|item| item.id).max()
    }

    /// True when both snapshots are the same allocation
    pub fn ptr_eq(&self, other: &PackingList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// New snapshot with `item` appended
    pub fn with_item(&self, item: Item) -> PackingList {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Arc::new(item));
        PackingList { items: Arc::new(items) }
    }

    /// New snapshot with `packed` flipped on the matching item.
    /// Returns `self` unchanged when no item matches.
    pub fn with_packed_toggled(&self, id: ItemId) -> PackingList {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .map(|item| if item.id == id { Arc::new(item.toggled()) } else { Arc::clone(item) })
            .collect();
        PackingList { items: Arc::new(items) }
    }

    /// New snapshot without the matching item.
    /// Returns `self` unchanged when no item matches.
    pub fn without(&self, id: ItemId) -> PackingList {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self.items.iter().filter(|item| item.id != id).cloned().collect();
        PackingList { items: Arc::new(items) }
    }

    pub fn cleared(&self) -> PackingList {
        PackingList::new()
    }
}

impl PartialEq for PackingList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.items == other.items
    }
}

impl Eq for PackingList {}

/// Hands out item ids; never repeats within one store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Sequence starting one past the largest id in `list`
    pub fn after(list: &PackingList) -> Self {
        Self {
            next: list.max_id().map_or(1, |id| id.0 + 1),
        }
    }

    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

/// Handle returned by `ItemListStore::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&PackingList) + Send + Sync>;

/// Owns the current snapshot and exposes the only legal mutations
pub struct ItemListStore {
    list: PackingList,
    ids: IdSequence,
    confirm: Arc<dyn Confirm>,
    clear_message: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ItemListStore {
    pub fn new(initial: PackingList, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            ids: IdSequence::after(&initial),
            list: initial,
            confirm,
            clear_message: DEFAULT_CLEAR_MESSAGE.to_string(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_clear_message(mut self, message: impl Into<String>) -> Self {
        self.clear_message = message.into();
        self
    }

    /// Current snapshot
    pub fn items(&self) -> PackingList {
        self.list.clone()
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.list)
    }

    pub fn view(&self, sort_by: SortBy) -> Vec<Arc<Item>> {
        sorted_view(&self.list, sort_by)
    }

    /// Append a new unpacked item.
    ///
    /// No validation happens here: the add form rejects empty descriptions
    /// before calling in, see `ItemDraft::validate`.
    pub fn add(&mut self, description: impl Into<String>, quantity: u32) -> PackingList {
        let item = Item::new(self.ids.next_id(), description, quantity);
        log::debug!("[STORE] add #{} {:?} x{}", item.id, item.description, item.quantity);
        let next = self.list.with_item(item);
        self.replace(next)
    }

    pub fn toggle_packed(&mut self, id: ItemId) -> PackingList {
        let next = self.list.with_packed_toggled(id);
        if next.ptr_eq(&self.list) {
            log::debug!("[STORE] toggle: no item with id {}", id);
            return next;
        }
        log::debug!("[STORE] toggle #{}", id);
        self.replace(next)
    }

    pub fn delete_item(&mut self, id: ItemId) -> PackingList {
        let next = self.list.without(id);
        if next.ptr_eq(&self.list) {
            log::debug!("[STORE] delete: no item with id {}", id);
            return next;
        }
        log::debug!("[STORE] delete #{}", id);
        self.replace(next)
    }

    /// Empty the list, but only after the injected confirmation says yes
    pub fn clear_list(&mut self) -> PackingList {
        if !self.confirm.confirm(&self.clear_message) {
            log::info!("[STORE] clear cancelled, keeping {} items", self.list.len());
            return self.items();
        }
        log::debug!("[STORE] clear {} items", self.list.len());
        let next = self.list.cleared();
        self.replace(next)
    }

    /// Register a listener called with every new snapshot
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&PackingList) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn replace(&mut self, next: PackingList) -> PackingList {
        self.list = next;
        for (_, listener) in &self.listeners {
            listener(&self.list);
        }
        self.items()
    }
}
