//! Stats Footer Component

use leptos::prelude::*;

use crate::store::{store_items, use_app_store};
use crate::stats::Stats;

#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();
    let message = move || Stats::of(&store_items(&store)).message();

    view! {
        <footer class="stats">{message}</footer>
    }
}
