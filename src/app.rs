//! Far Away Frontend App
//!
//! Main application component: logo, add form, list, stats.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, Logo, PackingListView, StatsFooter};
use crate::config::AppConfig;
use crate::confirm::BrowserConfirm;
use crate::context::AppContext;
use crate::packing_list::ItemListStore;
use crate::stats::Stats;
use crate::store::{store_items, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let initial = config.initial_list();
    log::info!("[APP] starting with {} items", initial.len());

    let store = Store::new(AppState::new(initial.clone()));
    let list = ItemListStore::new(initial, Arc::new(BrowserConfirm))
        .with_clear_message(config.confirm_clear_message.clone());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(list, store, config.max_quantity));

    Effect::new(move |_| {
        let stats = Stats::of(&store_items(&store));
        log::debug!("[APP] {} items, {} packed ({}%)", stats.total, stats.packed, stats.percentage);
    });

    view! {
        <div class="app">
            <Logo />
            <AddItemForm />
            <PackingListView />
            <StatsFooter />
        </div>
    }
}
